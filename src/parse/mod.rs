mod faces;
mod weight;

pub use faces::MAX_SIDES;

use winnow::Parser;

use crate::error::{Error, Result};

/// Parses numeric faces, either as `d{sides}` (faces `1..=sides`) or as a
/// comma separated list optionally wrapped in brackets.
pub fn parse_faces(notation: &str) -> Result<Vec<i64>> {
    faces::number_faces
        .parse(notation)
        .map_err(|e| Error::InvalidInput(e.to_string()))
}

/// Parses a comma separated list of word faces, optionally wrapped in brackets.
pub fn parse_text_faces(notation: &str) -> Result<Vec<String>> {
    faces::text_faces
        .parse(notation)
        .map_err(|e| Error::InvalidInput(e.to_string()))
}

/// Parses a weight, which must be a finite non-negative real number.
pub fn parse_weight(text: &str) -> Result<f64> {
    let value = weight::weight
        .parse(text)
        .map_err(|e| Error::InvalidWeight(e.to_string()))?;
    validate_weight(value)
}

pub(crate) fn validate_weight(weight: f64) -> Result<f64> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::InvalidWeight(format!(
            "{weight} is not a finite non-negative number"
        )));
    }
    Ok(weight)
}
