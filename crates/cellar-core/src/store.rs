//! The persistence boundary for beer records.

use async_trait::async_trait;

use crate::Result;
use crate::beer::{Beer, BeerPatch, NewBeer};
use crate::types::BeerId;

/// A category value together with how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub value: String,
    pub count: u64,
}

/// A beer store implementation.
///
/// The store exclusively owns persisted records; callers hold transient
/// copies. Mutations on an unknown id signal
/// [`Error::NotFound`](crate::Error::NotFound) without side effects.
#[async_trait]
pub trait BeerStore: Send + Sync {
    /// Persist a validated input, assigning id and creation timestamp.
    async fn create(&self, input: NewBeer) -> Result<Beer>;

    /// Fetch a single record.
    async fn get_by_id(&self, id: &BeerId) -> Result<Beer>;

    /// Merge a partial update into an existing record and return the
    /// updated record.
    async fn update(&self, id: &BeerId, patch: BeerPatch) -> Result<Beer>;

    /// Delete a record outright.
    async fn delete(&self, id: &BeerId) -> Result<()>;

    /// All records, newest first by `date_added`.
    async fn list_all(&self) -> Result<Vec<Beer>>;

    /// Total number of records.
    async fn count(&self) -> Result<u64>;

    /// Number of records matching the predicate.
    async fn count_where(&self, predicate: for<'a> fn(&'a Beer) -> bool) -> Result<u64>;

    /// The most frequent value of `field`, or `None` for an empty store.
    /// Ties resolve to the lexicographically smallest value.
    async fn top_by_frequency(
        &self,
        field: for<'a> fn(&'a Beer) -> &'a str,
    ) -> Result<Option<CategoryCount>>;

    /// Mean of `value` over records where it is present; `0.0` when
    /// nothing matches.
    async fn average_where(&self, value: for<'a> fn(&'a Beer) -> Option<f64>) -> Result<f64>;
}
