/// Set of functions used to assure the correctness of the rendered layouts.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::{COORD_EPSILON, FPA};
