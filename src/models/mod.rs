pub mod food;
pub mod plan;

pub use food::{CostTier, NutritionRecord, Origin, ProteinSource};
pub use plan::{DailyPlan, Meal, MealType, ProteinProgress};
