//! Travel-plan normalization
//!
//! Canonicalizes user-entered fields into the exact tokens the classifier was
//! trained on, then validates them. Validation failures are reported before any
//! prediction request is made.

mod regions;

use crate::error::DomainError;
use crate::value_objects::{DepartureMonth, Spontaneity};

/// Travel-plan fields as the user typed them
#[derive(Debug, Clone, Copy)]
pub struct RawTravelPlan<'a> {
    pub destination: &'a str,
    pub departure_month: &'a str,
    pub spontaneity: &'a str,
}

/// Validated, canonical travel-plan fields, ready for prediction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTravelPlan {
    pub destination: String,
    pub departure_month: DepartureMonth,
    pub spontaneity: Spontaneity,
}

fn token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Trimmed, lowercased destination with known region aliases expanded
pub fn canonical_destination(raw: &str) -> String {
    let destination = token(raw);
    match regions::region_label(&destination) {
        Some(label) => label.to_string(),
        None => destination,
    }
}

impl NormalizedTravelPlan {
    pub fn from_raw(raw: RawTravelPlan<'_>) -> Result<Self, DomainError> {
        let destination = canonical_destination(raw.destination);
        let departure_month = token(raw.departure_month);
        let spontaneity = token(raw.spontaneity);

        if destination.is_empty() {
            return Err(DomainError::invalid_plan("destination", "must not be empty"));
        }
        if departure_month.is_empty() {
            return Err(DomainError::invalid_plan("departure month", "must not be empty"));
        }
        if spontaneity.is_empty() {
            return Err(DomainError::invalid_plan("spontaneity", "must not be empty"));
        }

        let spontaneity = spontaneity
            .parse::<Spontaneity>()
            .map_err(|reason| DomainError::invalid_plan("spontaneity", reason))?;
        let departure_month = departure_month
            .parse::<DepartureMonth>()
            .map_err(|reason| DomainError::invalid_plan("departure month", reason))?;

        Ok(Self {
            destination,
            departure_month,
            spontaneity,
        })
    }
}
