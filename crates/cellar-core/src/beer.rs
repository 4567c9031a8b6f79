//! The beer record and its lifecycle types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::BeerId;

/// A persisted beer record.
///
/// `id` and `date_added` are assigned by the store on creation and never
/// change afterwards. `date_drank` is maintained by the store when the
/// `drank` flag transitions (see [`BeerPatch::apply`]), not supplied by
/// callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    pub id: BeerId,
    pub name: String,
    pub brewery: String,
    pub style: String,
    pub abv: f64,
    /// `None` means "not rated"; serialized as `null` on the wire.
    pub rating: Option<u8>,
    pub notes: String,
    pub drank: bool,
    pub date_added: DateTime<Utc>,
    pub date_drank: Option<DateTime<Utc>>,
}

/// A validated, normalized creation input. Strings are trimmed and
/// optional fields defaulted; produced by
/// [`BeerInput::validate`](crate::validate::BeerInput::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct NewBeer {
    pub name: String,
    pub brewery: String,
    pub style: String,
    pub abv: f64,
    pub rating: Option<u8>,
    pub notes: String,
    pub drank: bool,
}

impl NewBeer {
    /// Materialize the record with a store-assigned id and timestamp.
    pub fn into_beer(self, id: BeerId, now: DateTime<Utc>) -> Beer {
        Beer {
            id,
            name: self.name,
            brewery: self.brewery,
            style: self.style,
            abv: self.abv,
            rating: self.rating,
            notes: self.notes,
            drank: self.drank,
            date_added: now,
            date_drank: None,
        }
    }
}

/// A validated partial update. Each `None` field is left untouched by
/// [`apply`](Self::apply); `rating: Some(None)` clears the rating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerPatch {
    pub name: Option<String>,
    pub brewery: Option<String>,
    pub style: Option<String>,
    pub abv: Option<f64>,
    pub rating: Option<Option<u8>>,
    pub notes: Option<String>,
    pub drank: Option<bool>,
}

impl BeerPatch {
    /// Merge this patch into an existing record.
    ///
    /// Only supplied fields change. A `drank` transition from `false` to
    /// `true` stamps `date_drank` with `now`; setting `drank` to `false`
    /// clears it.
    pub fn apply(self, beer: &mut Beer, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            beer.name = name;
        }
        if let Some(brewery) = self.brewery {
            beer.brewery = brewery;
        }
        if let Some(style) = self.style {
            beer.style = style;
        }
        if let Some(abv) = self.abv {
            beer.abv = abv;
        }
        if let Some(rating) = self.rating {
            beer.rating = rating;
        }
        if let Some(notes) = self.notes {
            beer.notes = notes;
        }
        if let Some(drank) = self.drank {
            if drank && !beer.drank {
                beer.date_drank = Some(now);
            } else if !drank {
                beer.date_drank = None;
            }
            beer.drank = drank;
        }
    }
}
