use std::cmp::Ordering;
use std::fmt::Display;

use float_cmp::approx_eq;

/// Absolute tolerance on coordinates, in millimeters
pub const COORD_EPSILON: f64 = 1e-9;

///Coordinate wrapper comparing through [`float_cmp::approx_eq!()`].
///Two values are equal when they differ by at most [`COORD_EPSILON`] or 4 ulps.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl From<f64> for FPA {
    fn from(n: f64) -> Self {
        FPA(n)
    }
}

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        approx_eq!(f64, self.0, other.0, epsilon = COORD_EPSILON, ulps = 4)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self == other {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
