use dialoguer::{Input, Select};

use crate::error::{PlannerError, Result};

/// Actions offered by the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    GeneratePlan,
    UpdateGoal,
    ScanFood,
    NutritionInfo,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::GeneratePlan,
        MenuAction::UpdateGoal,
        MenuAction::ScanFood,
        MenuAction::NutritionInfo,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::GeneratePlan => "Generate New Plan",
            MenuAction::UpdateGoal => "Update Protein Goal",
            MenuAction::ScanFood => "Food Scanner",
            MenuAction::NutritionInfo => "Nutrition Info",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next menu action.
pub fn prompt_menu() -> Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL
        .get(selection)
        .copied()
        .unwrap_or(MenuAction::Quit))
}

/// Parse a protein goal entered as text. Range checks happen in the engine.
pub fn parse_goal(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Please enter a valid number".to_string()))
}

/// Prompt for a new daily protein goal.
pub fn prompt_protein_goal(current: u32) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt("Protein Goal (g)")
        .default(current.to_string())
        .interact_text()?;

    parse_goal(&input)
}

/// Prompt for a food name to search.
pub fn prompt_search_query() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search Food")
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_goal() {
        assert_eq!(parse_goal(" 75 ").unwrap(), 75);
        assert_eq!(parse_goal("-5").unwrap(), -5);
        assert!(matches!(
            parse_goal("lots"),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_menu_labels_unique() {
        let mut labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        labels.dedup();
        assert_eq!(labels.len(), MenuAction::ALL.len());
    }
}
