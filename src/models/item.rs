//! Financial item model
//!
//! A single record type covers both obligations ("Needs") and discretionary
//! goals ("Wants"); the two differ only in their category tag and in how the
//! date is labelled when shown to the user.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Unique identifier for a financial item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(uuid::Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "itm-{}", &self.0.to_string()[..8])
    }
}

/// Which list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// A required obligation (rent, utilities, groceries)
    Need,
    /// A discretionary goal saved toward
    Want,
}

impl ItemCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Need => "Need",
            Self::Want => "Want",
        }
    }

    /// Label used for the item's date: Needs are due, Wants are targeted
    pub fn date_label(&self) -> &'static str {
        match self {
            Self::Need => "Due",
            Self::Want => "Target",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Need or Want owned by a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialItem {
    pub id: ItemId,
    pub category: ItemCategory,
    pub description: String,
    pub cost: Money,
    /// Due date for Needs, target date for Wants
    pub due_date: NaiveDate,
    #[serde(default)]
    is_complete: bool,
    pub created_at: DateTime<Utc>,
}

impl FinancialItem {
    /// Create a new, incomplete item
    pub fn new(
        category: ItemCategory,
        description: impl Into<String>,
        cost: Money,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: ItemId::new(),
            category,
            description: description.into(),
            cost,
            due_date,
            is_complete: false,
            created_at: Utc::now(),
        }
    }

    pub fn need(description: impl Into<String>, cost: Money, due_date: NaiveDate) -> Self {
        Self::new(ItemCategory::Need, description, cost, due_date)
    }

    pub fn want(description: impl Into<String>, cost: Money, target_date: NaiveDate) -> Self {
        Self::new(ItemCategory::Want, description, cost, target_date)
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Mark the item as paid or achieved. There is no way back.
    pub fn mark_complete(&mut self) {
        self.is_complete = true;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_cost(&mut self, cost: Money) {
        self.cost = cost;
    }

    pub fn set_due_date(&mut self, due_date: NaiveDate) {
        self.due_date = due_date;
    }

    pub fn date_label(&self) -> &'static str {
        self.category.date_label()
    }

    /// Check the shape of user-entered data before it reaches a profile
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.description.trim().is_empty() {
            return Err(ItemValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl fmt::Display for FinancialItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}: {})",
            self.description,
            self.cost,
            self.date_label(),
            self.due_date.format("%Y-%m-%d")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyDescription,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for ItemValidationError {}
