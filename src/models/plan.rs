use std::fmt;

use serde::Serialize;

use crate::models::ProteinSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// Slots in the order a day is planned.
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        };
        f.write_str(label)
    }
}

/// One protein, one vegetable dish and one carbohydrate dish for a slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub meal_type: MealType,
    pub protein: ProteinSource,
    pub veggie: String,
    pub carb: String,
}

/// The three meals of a day and their combined protein.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub total_protein_g: f64,
}

impl DailyPlan {
    /// Builds a plan, summing protein from the meals themselves.
    pub fn new(breakfast: Meal, lunch: Meal, dinner: Meal) -> Self {
        let total_protein_g =
            breakfast.protein.protein_g + lunch.protein.protein_g + dinner.protein.protein_g;
        Self {
            breakfast,
            lunch,
            dinner,
            total_protein_g,
        }
    }

    pub fn meals(&self) -> [&Meal; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }
}

/// How a plan's protein compares with the daily goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProteinProgress {
    pub total_g: f64,
    pub goal_g: u32,
    /// Grams still missing; 0 once the goal is reached.
    pub remaining_g: f64,
    pub percent: f64,
    pub goal_met: bool,
}

impl ProteinProgress {
    pub fn new(total_g: f64, goal_g: u32) -> Self {
        let goal = f64::from(goal_g);
        let percent = if goal > 0.0 {
            total_g / goal * 100.0
        } else {
            0.0
        };
        Self {
            total_g,
            goal_g,
            remaining_g: (goal - total_g).max(0.0),
            percent,
            goal_met: total_g >= goal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostTier, Origin};

    fn meal(meal_type: MealType, protein_g: f64) -> Meal {
        Meal {
            meal_type,
            protein: ProteinSource::new("Test", protein_g, CostTier::Low, Origin::Animal),
            veggie: "Cabbage Salad".to_string(),
            carb: "Roti (1 piece)".to_string(),
        }
    }

    #[test]
    fn test_plan_total_is_sum_of_meals() {
        let plan = DailyPlan::new(
            meal(MealType::Breakfast, 12.0),
            meal(MealType::Lunch, 18.0),
            meal(MealType::Dinner, 25.0),
        );
        assert_eq!(plan.total_protein_g, 55.0);
        assert_eq!(plan.meals()[1].meal_type, MealType::Lunch);
    }

    #[test]
    fn test_progress_short_of_goal() {
        let progress = ProteinProgress::new(36.0, 50);
        assert!(!progress.goal_met);
        assert!((progress.remaining_g - 14.0).abs() < 0.001);
        assert!((progress.percent - 72.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_goal_exceeded() {
        let progress = ProteinProgress::new(60.0, 50);
        assert!(progress.goal_met);
        assert_eq!(progress.remaining_g, 0.0);
    }
}
