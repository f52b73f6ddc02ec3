//! Budget history
//!
//! The profile store turns each successful save into [`BudgetEvent`]s
//! (income and savings movements, allocation changes, needs and wants
//! added, completed, edited or removed) and appends them to the history
//! file through [`AuditLog`]. History failures are logged and never block
//! a save.

mod event;
mod log;

pub use event::{AuditRecord, BudgetEvent, ItemEdit};
pub use log::AuditLog;
