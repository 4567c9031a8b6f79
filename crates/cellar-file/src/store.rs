//! Filesystem storage for beer records.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use cellar_core::error::{Error, Result};
use cellar_core::store::{BeerStore, CategoryCount};
use cellar_core::{Beer, BeerId, BeerPatch, NewBeer};

fn map_io(err: std::io::Error) -> Error {
    Error::Storage {
        message: format!("IO error: {}", err),
    }
}

fn map_json(err: serde_json::Error) -> Error {
    Error::Storage {
        message: format!("corrupt document: {}", err),
    }
}

/// Filesystem-backed document store: one JSON document per record under
/// `<root>/beers/<id>.json`.
#[derive(Debug, Clone)]
pub struct FileBeerStore {
    root: PathBuf,
}

impl FileBeerStore {
    /// Create a new store rooted at the given directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn beers_dir(&self) -> PathBuf {
        self.root.join("beers")
    }

    fn beer_path(&self, id: &BeerId) -> PathBuf {
        self.beers_dir().join(format!("{}.json", id))
    }

    /// Generate a new record id: 24 hex characters from a UUIDv4.
    fn generate_id(&self) -> Result<BeerId> {
        let hex = Uuid::new_v4().simple().to_string();
        BeerId::new(&hex[..24])
    }

    fn read_beer(&self, id: &BeerId) -> Result<Beer> {
        let path = self.beer_path(id);

        if !path.exists() {
            return Err(Error::NotFound {
                id: id.to_string(),
            });
        }

        let content = fs::read_to_string(&path).map_err(map_io)?;
        serde_json::from_str(&content).map_err(map_json)
    }

    fn write_beer(&self, beer: &Beer) -> Result<()> {
        let path = self.beer_path(&beer.id);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }

        let content = serde_json::to_string_pretty(beer).map_err(map_json)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(map_io)?;
        fs::rename(&temp_path, &path).map_err(map_io)?;

        Ok(())
    }

    /// Read every record in the collection, in unspecified order.
    /// Unreadable entries are skipped with a warning rather than failing
    /// the whole scan.
    fn scan(&self) -> Result<Vec<Beer>> {
        let dir = self.beers_dir();

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut beers = Vec::new();

        for entry in fs::read_dir(&dir).map_err(map_io)? {
            let entry = entry.map_err(map_io)?;
            let path = entry.path();

            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    warn!(path = %path.display(), %err, "Skipping unreadable document");
                    continue;
                }
            };

            match serde_json::from_str::<Beer>(&content) {
                Ok(beer) => beers.push(beer),
                Err(err) => {
                    warn!(path = %path.display(), %err, "Skipping corrupt document");
                }
            }
        }

        Ok(beers)
    }
}

#[async_trait]
impl BeerStore for FileBeerStore {
    #[instrument(skip(self, input))]
    async fn create(&self, input: NewBeer) -> Result<Beer> {
        let id = self.generate_id()?;
        let beer = input.into_beer(id, Utc::now());

        self.write_beer(&beer)?;

        debug!(id = %beer.id, name = %beer.name, "Created beer");

        Ok(beer)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &BeerId) -> Result<Beer> {
        self.read_beer(id)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &BeerId, patch: BeerPatch) -> Result<Beer> {
        let mut beer = self.read_beer(id)?;
        patch.apply(&mut beer, Utc::now());

        self.write_beer(&beer)?;

        debug!(id = %beer.id, "Updated beer");

        Ok(beer)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &BeerId) -> Result<()> {
        let path = self.beer_path(id);

        if !path.exists() {
            return Err(Error::NotFound {
                id: id.to_string(),
            });
        }

        fs::remove_file(&path).map_err(map_io)?;

        debug!(id = %id, "Deleted beer");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Beer>> {
        let mut beers = self.scan()?;

        beers.sort_by(|a, b| {
            b.date_added
                .cmp(&a.date_added)
                .then_with(|| b.id.as_str().cmp(a.id.as_str()))
        });

        Ok(beers)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.scan()?.len() as u64)
    }

    async fn count_where(&self, predicate: for<'a> fn(&'a Beer) -> bool) -> Result<u64> {
        let count = self.scan()?.iter().filter(|b| predicate(b)).count();
        Ok(count as u64)
    }

    async fn top_by_frequency(
        &self,
        field: for<'a> fn(&'a Beer) -> &'a str,
    ) -> Result<Option<CategoryCount>> {
        let beers = self.scan()?;

        let mut counts: HashMap<String, u64> = HashMap::new();
        for beer in &beers {
            *counts.entry(field(beer).to_string()).or_insert(0) += 1;
        }

        // Highest count wins; equal counts resolve to the
        // lexicographically smallest value.
        let best = counts
            .into_iter()
            .max_by(|(a_value, a_count), (b_value, b_count)| {
                a_count.cmp(b_count).then_with(|| b_value.cmp(a_value))
            });

        Ok(best.map(|(value, count)| CategoryCount { value, count }))
    }

    async fn average_where(&self, value: for<'a> fn(&'a Beer) -> Option<f64>) -> Result<f64> {
        let values: Vec<f64> = self.scan()?.iter().filter_map(|b| value(b)).collect();

        if values.is_empty() {
            return Ok(0.0);
        }

        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }
}
