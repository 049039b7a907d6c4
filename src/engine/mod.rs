pub mod goal;
pub mod recommendation;

pub use goal::{DEFAULT_PROTEIN_GOAL, MAX_PROTEIN_GOAL, MIN_PROTEIN_GOAL, ProteinGoal};
pub use recommendation::RecommendationEngine;
