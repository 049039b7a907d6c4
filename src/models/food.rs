use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-100g nutrition fact sheet for one food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub name: String,

    #[serde(rename = "protein")]
    pub protein_g: f64,

    pub calories: f64,

    #[serde(rename = "carbs")]
    pub carbs_g: f64,

    #[serde(rename = "fat")]
    pub fat_g: f64,

    #[serde(rename = "tips")]
    pub tip: String,
}

impl NutritionRecord {
    /// Case-insensitive comparison against the display name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// True when `query` is a case-insensitive substring of the display name.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Relative price of a protein source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostTier {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CostTier::VeryLow => "Very Low",
            CostTier::Low => "Low",
            CostTier::Medium => "Medium",
            CostTier::High => "High",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Animal,
    Plant,
    Dairy,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Origin::Animal => "Animal",
            Origin::Plant => "Plant",
            Origin::Dairy => "Dairy",
        };
        f.write_str(label)
    }
}

/// A protein-bearing serving that anchors a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinSource {
    pub name: String,

    #[serde(rename = "protein")]
    pub protein_g: f64,

    #[serde(rename = "cost")]
    pub cost_tier: CostTier,

    #[serde(rename = "type")]
    pub origin: Origin,
}

impl ProteinSource {
    pub fn new(name: &str, protein_g: f64, cost_tier: CostTier, origin: Origin) -> Self {
        Self {
            name: name.to_string(),
            protein_g,
            cost_tier,
            origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> NutritionRecord {
        NutritionRecord {
            name: "Rice".to_string(),
            protein_g: 2.7,
            calories: 130.0,
            carbs_g: 28.0,
            fat_g: 0.3,
            tip: "Good energy source.".to_string(),
        }
    }

    #[test]
    fn test_name_matches_case_insensitive() {
        let record = rice();
        assert!(record.name_matches("rice"));
        assert!(record.name_matches("RICE"));
        assert!(!record.name_matches("ric"));
    }

    #[test]
    fn test_name_contains() {
        let record = rice();
        assert!(record.name_contains("IC"));
        assert!(record.name_contains(""));
        assert!(!record.name_contains("bread"));
    }

    #[test]
    fn test_protein_source_json_field_names() {
        let json = r#"{"name": "Dhal (1 cup cooked)", "protein": 18, "cost": "Very Low", "type": "Plant"}"#;
        let source: ProteinSource = serde_json::from_str(json).unwrap();
        assert_eq!(source.cost_tier, CostTier::VeryLow);
        assert_eq!(source.origin, Origin::Plant);
        assert_eq!(source.protein_g, 18.0);
    }
}
