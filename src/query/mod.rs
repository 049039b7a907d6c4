pub mod recognizer;
pub mod service;

pub use recognizer::{FoodRecognizer, RandomRecognizer};
pub use service::{FoodQueryService, SUGGESTION_THRESHOLD};
