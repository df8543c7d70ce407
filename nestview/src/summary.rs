use std::fmt::{Display, Formatter};

use crate::entities::NestingResult;

/// Overall outcome of a nesting job
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing left unplaced and at least one part placed
    AllPlaced,
    /// Nothing placed and nothing reported as unplaced
    NothingPlaced,
    /// Some parts were reported as unplaced, the unplaced list says it all
    Partial,
}

/// Textual summary of an installed nesting result.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub placed: usize,
    pub unplaced: usize,
    pub sheets_used: usize,
    /// (sheet instance id, efficiency in percent)
    pub sheet_efficiencies: Vec<(String, f64)>,
    pub total_efficiency: Option<f64>,
    /// (name, quantity), quantity is `None` when the packing engine did not report it
    pub unplaced_parts: Vec<(String, Option<u64>)>,
    pub outcome: Outcome,
}

impl Summary {
    pub fn new(result: &NestingResult, sheets_used: usize) -> Self {
        let stats = &result.statistics;
        let placed = stats
            .total_parts_placed
            .map_or(result.placements.len(), |n| n as usize);
        let unplaced = stats.total_parts_unplaced.map_or_else(
            || result.unplaced.iter().map(|u| u.quantity.unwrap_or(1) as usize).sum(),
            |n| n as usize,
        );

        let outcome = match (result.unplaced.is_empty(), placed > 0) {
            (false, _) => Outcome::Partial,
            (true, true) => Outcome::AllPlaced,
            (true, false) => Outcome::NothingPlaced,
        };

        Summary {
            placed,
            unplaced,
            sheets_used,
            sheet_efficiencies: result
                .sheet_stats
                .iter()
                .map(|s| (s.sheet_id.clone(), s.efficiency))
                .collect(),
            total_efficiency: stats.total_efficiency,
            unplaced_parts: result
                .unplaced
                .iter()
                .map(|u| (u.display_name().to_owned(), u.quantity))
                .collect(),
            outcome,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Placed: {}", self.placed)?;
        writeln!(f, "Unplaced: {}", self.unplaced)?;
        writeln!(f, "Sheets used: {}", self.sheets_used)?;
        if !self.sheet_efficiencies.is_empty() {
            writeln!(f, "Efficiency per sheet:")?;
            for (sheet_id, efficiency) in &self.sheet_efficiencies {
                writeln!(f, "  {sheet_id}: {efficiency}%")?;
            }
        }
        if let Some(total) = self.total_efficiency {
            writeln!(f, "Total efficiency: {total}%")?;
        }
        if !self.unplaced_parts.is_empty() {
            writeln!(f, "Not placed:")?;
            for (name, quantity) in &self.unplaced_parts {
                match quantity {
                    Some(q) => writeln!(f, "  {name}: {q}x")?,
                    None => writeln!(f, "  {name}: ?x")?,
                }
            }
        }
        match self.outcome {
            Outcome::AllPlaced => writeln!(f, "All parts placed!"),
            Outcome::NothingPlaced => writeln!(f, "Nothing placed."),
            Outcome::Partial => Ok(()),
        }
    }
}
