use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::ProteinSource;

static BUILTIN_JSON: &str = include_str!("../data/meal_catalog.json");

static BUILTIN: LazyLock<MealCatalog> = LazyLock::new(|| {
    serde_json::from_str(BUILTIN_JSON).expect("meal_catalog.json should be valid JSON")
});

/// Protein sources, dish names and tips that meal plans are drawn from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealCatalog {
    pub proteins: Vec<ProteinSource>,
    pub veggies: Vec<String>,
    pub carbs: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl MealCatalog {
    pub fn new(
        proteins: Vec<ProteinSource>,
        veggies: Vec<String>,
        carbs: Vec<String>,
        tips: Vec<String>,
    ) -> Self {
        Self {
            proteins,
            veggies,
            carbs,
            tips,
        }
    }

    /// The compiled-in Sri Lankan catalog.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Fails with `EmptyCatalog` naming the first empty list a meal needs.
    ///
    /// Tips are optional.
    pub fn validate(&self) -> Result<()> {
        if self.proteins.is_empty() {
            return Err(PlannerError::EmptyCatalog("proteins"));
        }
        if self.veggies.is_empty() {
            return Err(PlannerError::EmptyCatalog("veggies"));
        }
        if self.carbs.is_empty() {
            return Err(PlannerError::EmptyCatalog("carbs"));
        }
        Ok(())
    }
}

/// Load and validate a meal catalog from a JSON file.
pub fn load_meal_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let content = fs::read_to_string(path)?;
    let catalog: MealCatalog = serde_json::from_str(&content)?;
    catalog.validate()?;
    Ok(catalog)
}
