use std::collections::HashSet;

use meal_planner_rs::catalog::MealCatalog;
use meal_planner_rs::engine::RecommendationEngine;
use meal_planner_rs::error::PlannerError;
use meal_planner_rs::models::{CostTier, MealType, Origin, ProteinSource};

fn single_item_catalog() -> MealCatalog {
    MealCatalog::new(
        vec![ProteinSource::new("Eggs", 12.0, CostTier::Low, Origin::Animal)],
        vec!["Cabbage Salad".to_string()],
        vec!["White Rice".to_string()],
        vec![],
    )
}

#[test]
fn test_goal_round_trips_for_every_valid_value() {
    let mut engine = RecommendationEngine::with_seed(MealCatalog::builtin(), 1);

    for goal in 20..=150 {
        engine.set_protein_goal(goal).unwrap();
        assert_eq!(i64::from(engine.get_protein_goal()), goal);
    }
}

#[test]
fn test_invalid_goal_leaves_previous_value() {
    let mut engine = RecommendationEngine::with_seed(MealCatalog::builtin(), 1);
    engine.set_protein_goal(80).unwrap();

    for bad in [-1, 0, 19, 151, 1000] {
        let err = engine.set_protein_goal(bad).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidGoal { value } if value == bad));
        assert_eq!(engine.get_protein_goal(), 80);
    }
}

#[test]
fn test_goal_below_minimum_keeps_default() {
    let mut engine = RecommendationEngine::with_seed(MealCatalog::builtin(), 1);
    assert!(engine.set_protein_goal(10).is_err());
    assert_eq!(engine.get_protein_goal(), 50);
}

#[test]
fn test_plan_total_matches_meal_sum() {
    let mut engine = RecommendationEngine::with_seed(MealCatalog::builtin(), 99);

    for _ in 0..50 {
        let plan = engine.generate_plan().unwrap();
        let expected = plan.breakfast.protein.protein_g
            + plan.lunch.protein.protein_g
            + plan.dinner.protein.protein_g;
        assert_eq!(plan.total_protein_g, expected);
    }
}

#[test]
fn test_plan_meal_order() {
    let mut engine = RecommendationEngine::with_seed(MealCatalog::builtin(), 5);
    let plan = engine.generate_plan().unwrap();

    assert_eq!(plan.breakfast.meal_type, MealType::Breakfast);
    assert_eq!(plan.lunch.meal_type, MealType::Lunch);
    assert_eq!(plan.dinner.meal_type, MealType::Dinner);
}

#[test]
fn test_single_item_catalog_is_deterministic() {
    let mut engine = RecommendationEngine::new(single_item_catalog());
    let plan = engine.generate_plan().unwrap();

    for meal in plan.meals() {
        assert_eq!(meal.protein.name, "Eggs");
        assert_eq!(meal.veggie, "Cabbage Salad");
        assert_eq!(meal.carb, "White Rice");
    }
    assert_eq!(plan.total_protein_g, 36.0);
}

#[test]
fn test_same_seed_same_plan() {
    let mut a = RecommendationEngine::with_seed(MealCatalog::builtin(), 2024);
    let mut b = RecommendationEngine::with_seed(MealCatalog::builtin(), 2024);

    for _ in 0..5 {
        assert_eq!(a.generate_plan().unwrap(), b.generate_plan().unwrap());
    }
}

#[test]
fn test_plan_draws_from_catalog() {
    let catalog = MealCatalog::builtin();
    let mut engine = RecommendationEngine::with_seed(catalog.clone(), 8);

    for _ in 0..20 {
        let plan = engine.generate_plan().unwrap();
        for meal in plan.meals() {
            assert!(catalog.proteins.contains(&meal.protein));
            assert!(catalog.veggies.contains(&meal.veggie));
            assert!(catalog.carbs.contains(&meal.carb));
        }
    }
}

#[test]
fn test_empty_catalog_fails_plan() {
    let mut catalog = single_item_catalog();
    catalog.proteins.clear();
    let mut engine = RecommendationEngine::with_seed(catalog, 1);

    let err = engine.generate_plan().unwrap_err();
    assert!(matches!(err, PlannerError::EmptyCatalog("proteins")));
}

#[test]
fn test_goal_change_does_not_alter_existing_plan() {
    let mut engine = RecommendationEngine::with_seed(MealCatalog::builtin(), 3);
    let plan = engine.generate_plan().unwrap();
    let before = plan.clone();

    engine.set_protein_goal(120).unwrap();
    assert_eq!(plan, before);
    assert_eq!(engine.progress(&plan).goal_g, 120);
}

#[test]
fn test_sample_tips_length_and_uniqueness() {
    let mut engine = RecommendationEngine::with_seed(MealCatalog::builtin(), 11);
    let available = engine.catalog().tips.len();

    for count in [0, 1, 3, available, available + 5] {
        let tips = engine.sample_tips(count);
        assert_eq!(tips.len(), count.min(available));

        let unique: HashSet<&String> = tips.iter().collect();
        assert_eq!(unique.len(), tips.len(), "tips should not repeat");
        assert!(tips.iter().all(|t| engine.catalog().tips.contains(t)));
    }
}

#[test]
fn test_sample_tips_order_varies() {
    let mut engine = RecommendationEngine::with_seed(MealCatalog::builtin(), 17);
    let declared = engine.catalog().tips.clone();

    // Ten shuffles of ten tips all landing in declaration order is effectively impossible.
    let any_reordered = (0..10).any(|_| engine.sample_tips(declared.len()) != declared);
    assert!(any_reordered);
}

#[test]
fn test_sample_tips_empty_list() {
    let mut engine = RecommendationEngine::with_seed(single_item_catalog(), 1);
    assert!(engine.sample_tips(3).is_empty());
}
