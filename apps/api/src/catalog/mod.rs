pub mod handlers;
pub mod models;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

pub use models::Institution;

/// The immutable university catalog, loaded once at startup and shared by
/// reference. Schema violations are a fatal load error; there is no
/// partial-catalog operation.
#[derive(Debug)]
pub struct Catalog {
    institutions: Vec<Institution>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open catalog file {}", path.display()))?;

        let mut institutions = Vec::new();
        for (idx, row) in reader.deserialize::<Institution>().enumerate() {
            // idx is 0-based over data rows; +2 accounts for the header line.
            let institution =
                row.with_context(|| format!("Invalid catalog row at line {}", idx + 2))?;
            institutions.push(institution);
        }

        info!(
            "Catalog loaded: {} institutions from {}",
            institutions.len(),
            path.display()
        );

        Ok(Catalog { institutions })
    }

    /// All rows in original catalog order. The Matcher relies on this order
    /// for deterministic tie-breaking.
    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    /// Sorted, deduplicated list of countries present in the catalog.
    /// Backs the profile form's country selector.
    pub fn countries(&self) -> Vec<String> {
        let mut countries: Vec<String> = self
            .institutions
            .iter()
            .map(|i| i.country.clone())
            .collect();
        countries.sort();
        countries.dedup();
        countries
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }
}
