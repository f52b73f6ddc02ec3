//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for profiles, items, budgets, goal
//! projections, and budget history. Every formatter takes the currency
//! symbol from settings.

pub mod history;
pub mod item;
pub mod profile;

pub use history::{describe_event, format_history};
pub use item::{format_item_list, format_projection, format_task_list};
pub use profile::{format_budget_summary, format_profile_details, format_profile_list};
