//! High-level, ergonomic library API: compute the weighted average of squares
//! straight from number/weight files. Prefer these entrypoints over the
//! low-level `core` modules when embedding SQMEAN.
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::stats::average_of_squares;
use crate::error::Result;
use crate::io::read_numbers;

/// Result of one computation, suitable for JSON reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub result: f64,
    /// How many numbers were read
    pub count: usize,
    /// Sum of the effective weights (the count itself when unweighted)
    pub total_weight: f64,
}

/// Read numbers (and optionally weights) from files and compute the
/// weighted average of squares.
pub fn compute_from_paths(numbers_path: &Path, weights_path: Option<&Path>) -> Result<Summary> {
    let numbers = read_numbers(numbers_path)?;
    let weights = weights_path.map(read_numbers).transpose()?;

    let result = average_of_squares(&numbers, weights.as_deref())?;
    let total_weight = match &weights {
        Some(weights) => weights.iter().sum(),
        None => numbers.len() as f64,
    };

    info!(
        "Computed average of squares over {} numbers (total weight {})",
        numbers.len(),
        total_weight
    );

    Ok(Summary {
        result,
        count: numbers.len(),
        total_weight,
    })
}
