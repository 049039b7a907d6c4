use thiserror::Error;

use crate::engine::{MAX_PROTEIN_GOAL, MIN_PROTEIN_GOAL};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(
        "Protein goal must be between {} and {}g, got {value}",
        MIN_PROTEIN_GOAL,
        MAX_PROTEIN_GOAL
    )]
    InvalidGoal { value: i64 },

    #[error("Catalog list '{0}' is empty")]
    EmptyCatalog(&'static str),

    #[error("Duplicate nutrition key: {0}")]
    DuplicateKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
