use std::path::Path;

use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::catalog::NutritionCatalog;
use crate::error::Result;
use crate::models::NutritionRecord;
use crate::query::recognizer::{FoodRecognizer, RandomRecognizer};

/// Minimum Jaro-Winkler similarity for a name suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Lookup, search and recognition over the nutrition catalog.
pub struct FoodQueryService<F: FoodRecognizer = RandomRecognizer> {
    catalog: NutritionCatalog,
    recognizer: F,
}

impl FoodQueryService<RandomRecognizer> {
    pub fn new(catalog: NutritionCatalog) -> Self {
        Self::with_recognizer(catalog, RandomRecognizer::new())
    }

    pub fn with_seed(catalog: NutritionCatalog, seed: u64) -> Self {
        Self::with_recognizer(catalog, RandomRecognizer::with_seed(seed))
    }
}

impl<F: FoodRecognizer> FoodQueryService<F> {
    pub fn with_recognizer(catalog: NutritionCatalog, recognizer: F) -> Self {
        Self {
            catalog,
            recognizer,
        }
    }

    pub fn catalog(&self) -> &NutritionCatalog {
        &self.catalog
    }

    /// Identify the food in `image` using the configured recognizer.
    pub fn recognize(&mut self, image: Option<&Path>) -> Result<NutritionRecord> {
        self.recognizer
            .recognize(&self.catalog, image)
            .inspect_err(|e| warn!(error = %e, "food recognition failed"))
    }

    /// Exact, case-insensitive match on display name. First match wins.
    pub fn lookup_by_name(&self, name: &str) -> Option<&NutritionRecord> {
        let found = self.catalog.records().find(|r| r.name_matches(name));
        if found.is_none() {
            debug!(name, "no nutrition record for name");
        }
        found
    }

    /// Records whose display name contains `query`, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&NutritionRecord> {
        self.catalog
            .records()
            .filter(|r| r.name_contains(query))
            .collect()
    }

    /// Closest display names to `name`, best first.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<&NutritionRecord> {
        let needle = name.to_lowercase();
        let mut candidates: Vec<(&NutritionRecord, f64)> = self
            .catalog
            .records()
            .map(|r| (r, jaro_winkler(&r.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(limit)
            .map(|(r, _)| r)
            .collect()
    }
}
