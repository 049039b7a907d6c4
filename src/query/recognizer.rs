use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::catalog::NutritionCatalog;
use crate::error::{PlannerError, Result};
use crate::models::NutritionRecord;

/// Identifies the food in an image and returns its catalog record.
pub trait FoodRecognizer {
    fn recognize(
        &mut self,
        catalog: &NutritionCatalog,
        image: Option<&Path>,
    ) -> Result<NutritionRecord>;
}

/// Stand-in recognizer: ignores the image and picks a catalog record
/// uniformly at random. Swap in a model-backed `FoodRecognizer` to do real
/// recognition.
pub struct RandomRecognizer<R: Rng = StdRng> {
    rng: R,
}

impl RandomRecognizer<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomRecognizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomRecognizer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FoodRecognizer for RandomRecognizer<R> {
    fn recognize(
        &mut self,
        catalog: &NutritionCatalog,
        image: Option<&Path>,
    ) -> Result<NutritionRecord> {
        if catalog.is_empty() {
            return Err(PlannerError::EmptyCatalog("nutrition"));
        }

        let index = self.rng.gen_range(0..catalog.len());
        let record = catalog
            .record_at(index)
            .ok_or(PlannerError::EmptyCatalog("nutrition"))?;

        debug!(image = ?image, food = %record.name, "random recognizer picked food");
        Ok(record.clone())
    }
}
