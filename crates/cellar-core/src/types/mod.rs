//! Validated identifier types.

mod beer_id;

pub use beer_id::BeerId;
