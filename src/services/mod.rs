//! Service layer for EconoMe
//!
//! Stateless calculations over profile data. Nothing here touches storage;
//! callers persist any mutation through the profile store.

pub mod allocation;
pub mod projector;

pub use allocation::{
    apply_savings_to_profile, calculate_needs_amount, calculate_projected_savings,
    calculate_wants_amount, summarize, AllocationSummary,
};
pub use projector::{estimate_goal_completion_months, project_goal};
