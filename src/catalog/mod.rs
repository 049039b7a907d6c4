mod meal;
mod nutrition;

pub use meal::{MealCatalog, load_meal_catalog};
pub use nutrition::{NutritionCatalog, NutritionEntry, load_nutrition_catalog};
