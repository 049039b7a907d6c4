use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Sri Lankan meal planner — daily plans from local dishes with a protein goal.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Meal catalog JSON file (defaults to the built-in catalog).
    #[arg(long)]
    pub meals: Option<PathBuf>,

    /// Nutrition catalog JSON file (defaults to the built-in database).
    #[arg(long)]
    pub nutrition: Option<PathBuf>,

    /// Seed for reproducible plans and scans.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial daily protein goal in grams (20-150).
    #[arg(long, allow_negative_numbers = true)]
    pub goal: Option<i64>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a daily meal plan.
    Plan {
        /// Number of nutrition tips to show.
        #[arg(long, default_value = "3")]
        tips: usize,
    },

    /// Sample nutrition tips.
    Tips {
        #[arg(long, default_value = "3")]
        count: usize,
    },

    /// Identify a food (simulated scanner).
    Scan {
        /// Image of the food; accepted but not analyzed.
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Look up a food by exact name (case-insensitive).
    Lookup { name: String },

    /// Search foods whose name contains the query.
    Search {
        #[arg(default_value = "")]
        query: String,
    },

    /// Interactive menu.
    Interactive,
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
