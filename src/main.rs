use clap::Parser;
use tracing::info;

use meal_planner_rs::catalog::{
    MealCatalog, NutritionCatalog, load_meal_catalog, load_nutrition_catalog,
};
use meal_planner_rs::cli::{Cli, Command};
use meal_planner_rs::engine::RecommendationEngine;
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::interface::{
    MenuAction, display_not_found, display_plan, display_record, display_scan,
    display_search_results, display_tips, prompt_menu, prompt_protein_goal, prompt_search_query,
};
use meal_planner_rs::logging::init_tracing;
use meal_planner_rs::query::FoodQueryService;

/// Tips shown alongside each plan in the interactive menu.
const MENU_TIP_COUNT: usize = 3;

/// Suggestions offered when a lookup misses.
const SUGGESTION_LIMIT: usize = 3;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let meals = match &cli.meals {
        Some(path) => load_meal_catalog(path)?,
        None => MealCatalog::builtin(),
    };
    let nutrition = match &cli.nutrition {
        Some(path) => load_nutrition_catalog(path)?,
        None => NutritionCatalog::builtin(),
    };
    info!(
        proteins = meals.proteins.len(),
        veggies = meals.veggies.len(),
        carbs = meals.carbs.len(),
        foods = nutrition.len(),
        "catalogs loaded"
    );

    let (mut engine, mut foods) = match cli.seed {
        Some(seed) => (
            RecommendationEngine::with_seed(meals, seed),
            // Offset so scans do not mirror the plan's draws.
            FoodQueryService::with_seed(nutrition, seed.wrapping_add(1)),
        ),
        None => (
            RecommendationEngine::new(meals),
            FoodQueryService::new(nutrition),
        ),
    };

    if let Some(goal) = cli.goal {
        engine.set_protein_goal(goal)?;
    }

    match cli.command.unwrap_or_default() {
        Command::Plan { tips } => cmd_plan(&mut engine, tips),
        Command::Tips { count } => {
            display_tips(&engine.sample_tips(count));
            Ok(())
        }
        Command::Scan { image } => {
            let record = foods.recognize(image.as_deref())?;
            display_scan(&record);
            Ok(())
        }
        Command::Lookup { name } => {
            cmd_lookup(&foods, &name);
            Ok(())
        }
        Command::Search { query } => {
            display_search_results(&query, &foods.search(&query));
            Ok(())
        }
        Command::Interactive => cmd_interactive(&mut engine, &mut foods),
    }
}

/// Generate and display a plan plus tips.
fn cmd_plan(engine: &mut RecommendationEngine, tip_count: usize) -> Result<()> {
    let plan = engine.generate_plan()?;
    let progress = engine.progress(&plan);
    display_plan(&plan, &progress);
    display_tips(&engine.sample_tips(tip_count));
    Ok(())
}

fn cmd_lookup(foods: &FoodQueryService, name: &str) {
    match foods.lookup_by_name(name) {
        Some(record) => display_record(record),
        None => display_not_found(name, &foods.suggest(name, SUGGESTION_LIMIT)),
    }
}

/// Menu loop: plan, goal, scanner and nutrition search until the user quits.
fn cmd_interactive(
    engine: &mut RecommendationEngine,
    foods: &mut FoodQueryService,
) -> Result<()> {
    println!("Sri Lankan Meal Planner");
    cmd_plan(engine, MENU_TIP_COUNT)?;

    loop {
        match prompt_menu()? {
            MenuAction::GeneratePlan => cmd_plan(engine, MENU_TIP_COUNT)?,
            MenuAction::UpdateGoal => {
                let updated = prompt_protein_goal(engine.get_protein_goal())
                    .and_then(|goal| engine.set_protein_goal(goal));
                match updated {
                    Ok(()) => {
                        println!("Protein goal updated to {}g", engine.get_protein_goal());
                        cmd_plan(engine, MENU_TIP_COUNT)?;
                    }
                    Err(e @ (PlannerError::InvalidGoal { .. } | PlannerError::InvalidInput(_))) => {
                        println!("{}", e);
                    }
                    Err(e) => return Err(e),
                }
            }
            MenuAction::ScanFood => {
                let record = foods.recognize(None)?;
                display_scan(&record);
            }
            MenuAction::NutritionInfo => {
                let query = prompt_search_query()?;
                if query.is_empty() {
                    println!("Please enter a food name");
                    continue;
                }
                display_search_results(&query, &foods.search(&query));
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}
