use crate::models::{DailyPlan, Meal, NutritionRecord, ProteinProgress};

/// Display a daily plan with protein progress against the goal.
pub fn display_plan(plan: &DailyPlan, progress: &ProteinProgress) {
    println!();
    println!("=== Daily Meal Plan ===");
    println!();

    for meal in plan.meals() {
        display_meal(meal);
    }

    println!("--- Protein ---");
    println!(
        "Protein: {:.0}/{}g ({:.0}%)",
        progress.total_g, progress.goal_g, progress.percent
    );
    if progress.goal_met {
        println!("Goal reached.");
    } else {
        println!("{:.0}g short of goal.", progress.remaining_g);
    }
    println!();
}

fn display_meal(meal: &Meal) {
    println!("[{}]", meal.meal_type);
    println!(
        "  Protein: {} ({}g, {} cost, {})",
        meal.protein.name, meal.protein.protein_g, meal.protein.cost_tier, meal.protein.origin
    );
    println!("  Veggie:  {}", meal.veggie);
    println!("  Carb:    {}", meal.carb);
    println!();
}

/// Display tips as a bulleted list.
pub fn display_tips(tips: &[String]) {
    if tips.is_empty() {
        return;
    }

    println!("=== Nutrition Tips ===");
    for tip in tips {
        println!("  • {}", tip);
    }
    println!();
}

/// Display a single nutrition record (values per 100g).
pub fn display_record(record: &NutritionRecord) {
    println!("{}", record.name);
    println!(
        "  Protein: {}g/100g • Calories: {} • Carbs: {}g • Fat: {}g",
        record.protein_g, record.calories, record.carbs_g, record.fat_g
    );
    println!("  Tips: {}", record.tip);
}

/// Display a scanner result.
pub fn display_scan(record: &NutritionRecord) {
    println!();
    println!("Detected: {}", record.name);
    println!("Protein: {}g/100g", record.protein_g);
    println!("Tips: {}", record.tip);
    println!();
}

/// Display search results, or a not-found message.
pub fn display_search_results(query: &str, results: &[&NutritionRecord]) {
    if results.is_empty() {
        println!("No information found for '{}'", query);
        return;
    }

    println!();
    println!("=== Results for '{}' ({} items) ===", query, results.len());
    println!();
    for record in results {
        display_record(record);
        println!();
    }
}

/// Display a lookup miss with optional suggestions.
pub fn display_not_found(name: &str, suggestions: &[&NutritionRecord]) {
    println!("No information found for '{}'", name);
    if !suggestions.is_empty() {
        let names: Vec<&str> = suggestions.iter().map(|r| r.name.as_str()).collect();
        println!("Did you mean: {}?", names.join(", "));
    }
}
