use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::catalog::MealCatalog;
use crate::engine::goal::ProteinGoal;
use crate::error::{PlannerError, Result};
use crate::models::{DailyPlan, Meal, MealType, ProteinProgress};

/// Samples meals from a fixed catalog and owns the user's protein goal.
///
/// Each protein, veggie and carb is drawn uniformly and independently; the
/// goal is only used to report progress and never steers selection.
pub struct RecommendationEngine<R: Rng = StdRng> {
    catalog: MealCatalog,
    goal: ProteinGoal,
    rng: R,
}

impl RecommendationEngine<StdRng> {
    /// Engine seeded from OS entropy.
    pub fn new(catalog: MealCatalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Engine with a reproducible random source.
    pub fn with_seed(catalog: MealCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RecommendationEngine<R> {
    pub fn with_rng(catalog: MealCatalog, rng: R) -> Self {
        Self {
            catalog,
            goal: ProteinGoal::default(),
            rng,
        }
    }

    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    /// Draw one protein, veggie and carb for the given slot.
    pub fn generate_meal(&mut self, meal_type: MealType) -> Result<Meal> {
        if let Err(e) = self.catalog.validate() {
            warn!(error = %e, "cannot generate meal");
            return Err(e);
        }

        let protein = self
            .catalog
            .proteins
            .choose(&mut self.rng)
            .ok_or(PlannerError::EmptyCatalog("proteins"))?
            .clone();
        let veggie = self
            .catalog
            .veggies
            .choose(&mut self.rng)
            .ok_or(PlannerError::EmptyCatalog("veggies"))?
            .clone();
        let carb = self
            .catalog
            .carbs
            .choose(&mut self.rng)
            .ok_or(PlannerError::EmptyCatalog("carbs"))?
            .clone();

        debug!(
            meal = %meal_type,
            protein = %protein.name,
            veggie = %veggie,
            carb = %carb,
            "generated meal"
        );

        Ok(Meal {
            meal_type,
            protein,
            veggie,
            carb,
        })
    }

    /// Breakfast, lunch and dinner, generated in that order.
    pub fn generate_plan(&mut self) -> Result<DailyPlan> {
        let breakfast = self.generate_meal(MealType::Breakfast)?;
        let lunch = self.generate_meal(MealType::Lunch)?;
        let dinner = self.generate_meal(MealType::Dinner)?;

        let plan = DailyPlan::new(breakfast, lunch, dinner);
        debug!(
            total_protein_g = plan.total_protein_g,
            goal_g = self.goal.grams(),
            "generated plan"
        );
        Ok(plan)
    }

    /// Replace the goal. Out-of-range values leave the current goal untouched.
    pub fn set_protein_goal(&mut self, value: i64) -> Result<()> {
        match ProteinGoal::new(value) {
            Ok(goal) => {
                info!(old = self.goal.grams(), new = goal.grams(), "protein goal updated");
                self.goal = goal;
                Ok(())
            }
            Err(e) => {
                warn!(value, "rejected protein goal");
                Err(e)
            }
        }
    }

    pub fn get_protein_goal(&self) -> u32 {
        self.goal.grams()
    }

    /// Compare a plan's protein total with the current goal.
    pub fn progress(&self, plan: &DailyPlan) -> ProteinProgress {
        ProteinProgress::new(plan.total_protein_g, self.goal.grams())
    }

    /// Up to `count` distinct tips in random order.
    pub fn sample_tips(&mut self, count: usize) -> Vec<String> {
        let mut tips = self.catalog.tips.clone();
        tips.shuffle(&mut self.rng);
        tips.truncate(count);
        tips
    }
}
