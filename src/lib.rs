#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod query;

pub use catalog::{MealCatalog, NutritionCatalog};
pub use engine::RecommendationEngine;
pub use error::{PlannerError, Result};
pub use models::{DailyPlan, Meal, MealType, NutritionRecord, ProteinSource};
pub use query::{FoodQueryService, FoodRecognizer, RandomRecognizer};
