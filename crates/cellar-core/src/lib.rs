//! cellar-core - Core types, validation and statistics for the cellar beer tracker.

pub mod beer;
pub mod envelope;
pub mod error;
pub mod stats;
pub mod store;
pub mod types;
pub mod validate;

pub use beer::{Beer, BeerPatch, NewBeer};
pub use envelope::ApiResponse;
pub use error::{Error, Result};
pub use stats::{BeerStats, TopBrewery, TopStyle, compute_stats};
pub use store::{BeerStore, CategoryCount};
pub use types::BeerId;
pub use validate::{BeerInput, FieldError, ValidationErrors};
