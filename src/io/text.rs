//! Plain-text number files: one or more float literals separated by any
//! whitespace, newlines included.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::parse::parse_numbers;
use crate::error::Result;

/// Read a whole file and parse its contents as whitespace-separated floats.
///
/// The file handle is scoped to the read; it is released whether the read
/// succeeds or fails.
pub fn read_numbers(path: &Path) -> Result<Vec<f64>> {
    let contents = fs::read_to_string(path)?;
    let numbers = parse_numbers(contents.lines())?;
    debug!("Read {} numbers from {:?}", numbers.len(), path);
    Ok(numbers)
}
