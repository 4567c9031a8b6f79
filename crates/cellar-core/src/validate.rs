//! Input validation for beer payloads.
//!
//! [`BeerInput`] is the raw wire form: every field is optional at the
//! serde level so that validation, not deserialization, decides what is
//! missing and can report all offending fields at once. Two modes share
//! the per-field rules: [`validate`](BeerInput::validate) for creation
//! (name/brewery/style/abv required) and
//! [`validate_partial`](BeerInput::validate_partial) for updates (every
//! field optional).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::beer::{BeerPatch, NewBeer};

/// Maximum length for name, brewery and style.
const MAX_TEXT: usize = 100;

/// Maximum length for notes.
const MAX_NOTES: usize = 500;

/// A single failed field in a rejected payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// The full set of failures for a rejected payload.
///
/// Validation never partially applies: either every field passes or the
/// whole payload is rejected with one entry per offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// The individual field failures.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A single-field rejection, used for path-parameter validation.
    pub fn single(path: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(path, message);
        errors
    }

    fn push(&mut self, path: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            path: path.to_string(),
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// The raw beer payload as received on the wire.
///
/// Serialization skips absent fields, so a partial update only carries
/// what the caller supplied. `rating` distinguishes "absent" (leave
/// unchanged) from an explicit `null` (clear the rating).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brewery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abv: Option<f64>,
    #[serde(
        deserialize_with = "absent_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drank: Option<bool>,
}

/// Maps an absent field to `None` and a present-but-null field to
/// `Some(None)`.
fn absent_or_null<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

impl BeerInput {
    /// Full-input validation for creation.
    ///
    /// Returns the normalized record input (trimmed strings, defaulted
    /// optional fields) or every failing field.
    pub fn validate(self) -> Result<NewBeer, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = required_text(&mut errors, "name", self.name);
        let brewery = required_text(&mut errors, "brewery", self.brewery);
        let style = required_text(&mut errors, "style", self.style);

        let abv = match self.abv {
            Some(v) => checked_abv(&mut errors, v),
            None => {
                errors.push("abv", "abv is required");
                None
            }
        };

        let rating = match self.rating.flatten() {
            Some(r) => checked_rating(&mut errors, r),
            None => None,
        };

        let notes = self
            .notes
            .and_then(|raw| checked_notes(&mut errors, raw))
            .unwrap_or_default();

        let drank = self.drank.unwrap_or(false);

        match (name, brewery, style, abv) {
            (Some(name), Some(brewery), Some(style), Some(abv)) if errors.is_empty() => {
                Ok(NewBeer {
                    name,
                    brewery,
                    style,
                    abv,
                    rating,
                    notes,
                    drank,
                })
            }
            _ => Err(errors),
        }
    }

    /// Partial validation for updates.
    ///
    /// Every field may be absent, but any present field is held to the
    /// same constraints as creation.
    pub fn validate_partial(self) -> Result<BeerPatch, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self
            .name
            .and_then(|raw| checked_text(&mut errors, "name", raw));
        let brewery = self
            .brewery
            .and_then(|raw| checked_text(&mut errors, "brewery", raw));
        let style = self
            .style
            .and_then(|raw| checked_text(&mut errors, "style", raw));

        let abv = self.abv.and_then(|v| checked_abv(&mut errors, v));

        let rating = match self.rating {
            Some(Some(r)) => checked_rating(&mut errors, r).map(Some),
            Some(None) => Some(None),
            None => None,
        };

        let notes = self
            .notes
            .and_then(|raw| checked_notes(&mut errors, raw));

        if errors.is_empty() {
            Ok(BeerPatch {
                name,
                brewery,
                style,
                abv,
                rating,
                notes,
                drank: self.drank,
            })
        } else {
            Err(errors)
        }
    }
}

fn required_text(
    errors: &mut ValidationErrors,
    path: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(raw) => checked_text(errors, path, raw),
        None => {
            errors.push(path, format!("{} is required", path));
            None
        }
    }
}

fn checked_text(errors: &mut ValidationErrors, path: &str, raw: String) -> Option<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        errors.push(path, format!("{} is required", path));
        return None;
    }

    if trimmed.chars().count() > MAX_TEXT {
        errors.push(
            path,
            format!("{} must be at most {} characters", path, MAX_TEXT),
        );
        return None;
    }

    Some(trimmed.to_string())
}

fn checked_notes(errors: &mut ValidationErrors, raw: String) -> Option<String> {
    let trimmed = raw.trim();

    if trimmed.chars().count() > MAX_NOTES {
        errors.push(
            "notes",
            format!("notes must be at most {} characters", MAX_NOTES),
        );
        return None;
    }

    Some(trimmed.to_string())
}

fn checked_abv(errors: &mut ValidationErrors, value: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&value) {
        errors.push("abv", "abv must be between 0 and 100");
        return None;
    }

    Some(value)
}

fn checked_rating(errors: &mut ValidationErrors, value: f64) -> Option<u8> {
    if value.fract() != 0.0 || !(1.0..=5.0).contains(&value) {
        errors.push("rating", "rating must be an integer between 1 and 5");
        return None;
    }

    Some(value as u8)
}
