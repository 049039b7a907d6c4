pub mod prompts;
pub mod render;

pub use prompts::{MenuAction, parse_goal, prompt_menu, prompt_protein_goal, prompt_search_query};
pub use render::{
    display_not_found, display_plan, display_record, display_scan, display_search_results,
    display_tips,
};
