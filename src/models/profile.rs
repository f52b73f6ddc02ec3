//! Profile model
//!
//! A profile is the aggregate a user works with: income, current savings,
//! how income is split between needs, wants, and savings, and the two
//! ordered lists of financial items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::item::{FinancialItem, ItemCategory, ItemId};
use super::money::Money;

/// How the three allocation values are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AllocationMode {
    /// Values are percentages (0-100 scale) of income
    #[default]
    Percentage,
    /// Values are absolute currency amounts
    Fixed,
}

impl fmt::Display for AllocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => write!(f, "Percentage"),
            Self::Fixed => write!(f, "Fixed"),
        }
    }
}

/// Needs/wants/savings split
///
/// The three values are independent: nothing requires them to total 100%
/// or to total income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AllocationSettings {
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
    #[serde(default)]
    pub mode: AllocationMode,
}

impl AllocationSettings {
    pub fn new(needs: Decimal, wants: Decimal, savings: Decimal, mode: AllocationMode) -> Self {
        Self {
            needs,
            wants,
            savings,
            mode,
        }
    }

    pub fn is_by_percentage(&self) -> bool {
        self.mode == AllocationMode::Percentage
    }
}

/// A user's budgeting profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Case-insensitive unique key within the profile store
    pub name: String,
    pub income: Money,
    pub savings_balance: Money,
    #[serde(default)]
    pub allocation: AllocationSettings,
    #[serde(default)]
    needs: Vec<FinancialItem>,
    #[serde(default)]
    wants: Vec<FinancialItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a profile with empty lists and a 0/0/0 percentage allocation
    pub fn new(name: impl Into<String>, income: Money, savings_balance: Money) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            income,
            savings_balance,
            allocation: AllocationSettings::default(),
            needs: Vec::new(),
            wants: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn set_income(&mut self, income: Money) {
        self.income = income;
        self.touch();
    }

    pub fn set_savings_balance(&mut self, balance: Money) {
        self.savings_balance = balance;
        self.touch();
    }

    /// Replace all three allocation values and the mode at once
    pub fn set_allocations(
        &mut self,
        needs: Decimal,
        wants: Decimal,
        savings: Decimal,
        mode: AllocationMode,
    ) {
        self.allocation = AllocationSettings::new(needs, wants, savings, mode);
        self.touch();
    }

    pub fn needs(&self) -> &[FinancialItem] {
        &self.needs
    }

    pub fn wants(&self) -> &[FinancialItem] {
        &self.wants
    }

    pub fn items(&self, category: ItemCategory) -> &[FinancialItem] {
        match category {
            ItemCategory::Need => &self.needs,
            ItemCategory::Want => &self.wants,
        }
    }

    /// Append an item to the list matching its category
    pub fn add_item(&mut self, item: FinancialItem) -> ItemId {
        let id = item.id;
        match item.category {
            ItemCategory::Need => self.needs.push(item),
            ItemCategory::Want => self.wants.push(item),
        }
        self.touch();
        id
    }

    /// Append a need; the item is re-tagged if it was built as a want
    pub fn add_need(&mut self, mut need: FinancialItem) -> ItemId {
        need.category = ItemCategory::Need;
        self.add_item(need)
    }

    /// Append a want; the item is re-tagged if it was built as a need
    pub fn add_want(&mut self, mut want: FinancialItem) -> ItemId {
        want.category = ItemCategory::Want;
        self.add_item(want)
    }

    pub fn item(&self, id: ItemId) -> Option<&FinancialItem> {
        self.needs.iter().chain(self.wants.iter()).find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut FinancialItem> {
        self.needs
            .iter_mut()
            .chain(self.wants.iter_mut())
            .find(|i| i.id == id)
    }

    /// Remove an item from whichever list holds it
    pub fn remove_item(&mut self, id: ItemId) -> Option<FinancialItem> {
        let list = if self.needs.iter().any(|i| i.id == id) {
            &mut self.needs
        } else {
            &mut self.wants
        };
        let position = list.iter().position(|i| i.id == id)?;
        let removed = list.remove(position);
        self.touch();
        Some(removed)
    }

    /// Mark an item complete; returns false if no such item exists
    pub fn mark_item_complete(&mut self, id: ItemId) -> bool {
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        item.mark_complete();
        self.touch();
        true
    }

    /// All needs followed by all wants, each in insertion order
    pub fn tasks(&self) -> Vec<&FinancialItem> {
        self.needs.iter().chain(self.wants.iter()).collect()
    }

    /// Tasks not yet marked complete
    pub fn pending_tasks(&self) -> Vec<&FinancialItem> {
        self.tasks().into_iter().filter(|i| !i.is_complete()).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.needs
            .iter()
            .chain(self.wants.iter())
            .filter(|i| i.is_complete())
            .count()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Income: {})", self.name, self.income)
    }
}
