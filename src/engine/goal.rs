use crate::error::{PlannerError, Result};

pub const MIN_PROTEIN_GOAL: u32 = 20;
pub const MAX_PROTEIN_GOAL: u32 = 150;
pub const DEFAULT_PROTEIN_GOAL: u32 = 50;

/// Daily protein target in grams, always within [20, 150].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProteinGoal(u32);

impl ProteinGoal {
    pub fn new(value: i64) -> Result<Self> {
        let range = i64::from(MIN_PROTEIN_GOAL)..=i64::from(MAX_PROTEIN_GOAL);
        if !range.contains(&value) {
            return Err(PlannerError::InvalidGoal { value });
        }
        Ok(Self(value as u32))
    }

    pub fn grams(self) -> u32 {
        self.0
    }
}

impl Default for ProteinGoal {
    fn default() -> Self {
        Self(DEFAULT_PROTEIN_GOAL)
    }
}

impl TryFrom<i64> for ProteinGoal {
    type Error = PlannerError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}
