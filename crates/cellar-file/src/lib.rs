//! cellar-file - Filesystem-backed document store for the cellar tracker.
//!
//! Records are stored one JSON document per file. The aggregate queries
//! are implemented as independent scans over the persisted collection,
//! mirroring what a document database's aggregation pipeline would do;
//! they must stay behaviorally identical to the in-memory reduction in
//! `cellar_core::stats`.

mod store;

pub use store::FileBeerStore;
