use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::NutritionRecord;

static BUILTIN_JSON: &str = include_str!("../data/nutrition.json");

static BUILTIN: LazyLock<NutritionCatalog> = LazyLock::new(|| {
    let entries: Vec<NutritionEntry> =
        serde_json::from_str(BUILTIN_JSON).expect("nutrition.json should be valid JSON");
    NutritionCatalog::from_entries(entries).expect("nutrition.json keys should be unique")
});

/// A record together with its canonical key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    pub key: String,
    #[serde(flatten)]
    pub record: NutritionRecord,
}

/// Nutrition facts keyed by lowercase food identifier, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionCatalog {
    entries: Vec<NutritionEntry>,
}

impl NutritionCatalog {
    /// Build a catalog, lowercasing keys and rejecting duplicates.
    pub fn from_entries(entries: Vec<NutritionEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(entries.len());

        for mut entry in entries {
            entry.key = entry.key.to_lowercase();
            if !seen.insert(entry.key.clone()) {
                return Err(PlannerError::DuplicateKey(entry.key));
            }
            normalized.push(entry);
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// The compiled-in food database.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Get a record by its canonical key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&NutritionRecord> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.record)
    }

    /// Records in declaration order.
    pub fn records(&self) -> impl Iterator<Item = &NutritionRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn record_at(&self, index: usize) -> Option<&NutritionRecord> {
        self.entries.get(index).map(|e| &e.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load a nutrition catalog from a JSON array of entries.
pub fn load_nutrition_catalog<P: AsRef<Path>>(path: P) -> Result<NutritionCatalog> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<NutritionEntry> = serde_json::from_str(&content)?;
    NutritionCatalog::from_entries(entries)
}
