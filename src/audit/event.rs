//! Budget history events
//!
//! Every persisted change to a profile is described as a list of
//! [`BudgetEvent`]s: what moved (income, savings, the allocation split, a
//! need or want) together with its old and new values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AllocationSettings, FinancialItem, ItemCategory, ItemId, Money, Profile};

/// One field of a need or want that was edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum ItemEdit {
    Description { from: String, to: String },
    Cost { from: Money, to: Money },
    Date { from: NaiveDate, to: NaiveDate },
}

/// Something that happened to a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BudgetEvent {
    ProfileCreated {
        income: Money,
        savings_balance: Money,
    },
    ProfileDeleted {
        needs: usize,
        wants: usize,
        savings_balance: Money,
    },
    /// An upsert matched on name but changed its case
    ProfileRenamed { from: String, to: String },
    IncomeChanged { from: Money, to: Money },
    /// Covers both direct edits and applied savings contributions
    SavingsBalanceChanged { from: Money, to: Money },
    AllocationChanged {
        from: AllocationSettings,
        to: AllocationSettings,
    },
    ItemAdded {
        category: ItemCategory,
        item: ItemId,
        description: String,
        cost: Money,
        date: NaiveDate,
    },
    ItemCompleted {
        category: ItemCategory,
        item: ItemId,
        description: String,
    },
    ItemEdited {
        category: ItemCategory,
        item: ItemId,
        description: String,
        edits: Vec<ItemEdit>,
    },
    ItemRemoved {
        category: ItemCategory,
        item: ItemId,
        description: String,
    },
}

impl BudgetEvent {
    /// Events for a profile entering the store, including its items
    pub fn created(profile: &Profile) -> Vec<Self> {
        let mut events = vec![Self::ProfileCreated {
            income: profile.income,
            savings_balance: profile.savings_balance,
        }];

        if profile.allocation != AllocationSettings::default() {
            events.push(Self::AllocationChanged {
                from: AllocationSettings::default(),
                to: profile.allocation,
            });
        }

        events.extend(profile.tasks().into_iter().map(Self::item_added));
        events
    }

    pub fn deleted(profile: &Profile) -> Self {
        Self::ProfileDeleted {
            needs: profile.needs().len(),
            wants: profile.wants().len(),
            savings_balance: profile.savings_balance,
        }
    }

    /// How `before` became `after`; empty when nothing observable changed
    ///
    /// `updated_at` is ignored. Items are matched by id, so an edited item
    /// is reported as an edit and never as a remove plus an add.
    pub fn between(before: &Profile, after: &Profile) -> Vec<Self> {
        let mut events = Vec::new();

        if before.name != after.name {
            events.push(Self::ProfileRenamed {
                from: before.name.clone(),
                to: after.name.clone(),
            });
        }
        if before.income != after.income {
            events.push(Self::IncomeChanged {
                from: before.income,
                to: after.income,
            });
        }
        if before.savings_balance != after.savings_balance {
            events.push(Self::SavingsBalanceChanged {
                from: before.savings_balance,
                to: after.savings_balance,
            });
        }
        if before.allocation != after.allocation {
            events.push(Self::AllocationChanged {
                from: before.allocation,
                to: after.allocation,
            });
        }

        for item in after.tasks() {
            let Some(previous) = before.item(item.id) else {
                events.push(Self::item_added(item));
                continue;
            };

            if item.is_complete() && !previous.is_complete() {
                events.push(Self::ItemCompleted {
                    category: item.category,
                    item: item.id,
                    description: item.description.clone(),
                });
            }

            let edits = item_edits(previous, item);
            if !edits.is_empty() {
                events.push(Self::ItemEdited {
                    category: item.category,
                    item: item.id,
                    description: item.description.clone(),
                    edits,
                });
            }
        }

        events.extend(
            before
                .tasks()
                .into_iter()
                .filter(|item| after.item(item.id).is_none())
                .map(|item| Self::ItemRemoved {
                    category: item.category,
                    item: item.id,
                    description: item.description.clone(),
                }),
        );

        events
    }

    fn item_added(item: &FinancialItem) -> Self {
        Self::ItemAdded {
            category: item.category,
            item: item.id,
            description: item.description.clone(),
            cost: item.cost,
            date: item.due_date,
        }
    }
}

fn item_edits(before: &FinancialItem, after: &FinancialItem) -> Vec<ItemEdit> {
    let mut edits = Vec::new();
    if before.description != after.description {
        edits.push(ItemEdit::Description {
            from: before.description.clone(),
            to: after.description.clone(),
        });
    }
    if before.cost != after.cost {
        edits.push(ItemEdit::Cost {
            from: before.cost,
            to: after.cost,
        });
    }
    if before.due_date != after.due_date {
        edits.push(ItemEdit::Date {
            from: before.due_date,
            to: after.due_date,
        });
    }
    edits
}

/// A timestamped event as stored in the history file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub timestamp: DateTime<Utc>,
    /// Profile name at the time of the event
    pub profile: String,
    pub event: BudgetEvent,
}

impl AuditRecord {
    pub fn new(profile: impl Into<String>, event: BudgetEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            profile: profile.into(),
            event,
        }
    }

    pub fn concerns(&self, profile: &str) -> bool {
        self.profile.to_lowercase() == profile.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AllocationMode;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_profile() -> Profile {
        let mut profile = Profile::new("Alice", Money::new(dec!(4000)), Money::new(dec!(250)));
        profile.add_need(FinancialItem::need("Rent", Money::new(dec!(1200)), date(2025, 11, 1)));
        profile.add_want(FinancialItem::want("Laptop", Money::new(dec!(1500)), date(2026, 3, 1)));
        profile.add_want(FinancialItem::want("Trip", Money::new(dec!(800)), date(2026, 6, 1)));
        profile
    }

    #[test]
    fn test_created_lists_profile_then_items() {
        let events = BudgetEvent::created(&sample_profile());

        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], BudgetEvent::ProfileCreated { .. }));
        assert!(matches!(
            &events[1],
            BudgetEvent::ItemAdded { category: ItemCategory::Need, description, .. }
                if description == "Rent"
        ));
        assert!(matches!(events[3], BudgetEvent::ItemAdded { category: ItemCategory::Want, .. }));
    }

    #[test]
    fn test_created_reports_non_default_allocation() {
        let mut profile = Profile::new("Bob", Money::new(dec!(3000)), Money::zero());
        profile.set_allocations(dec!(50), dec!(30), dec!(20), AllocationMode::Percentage);

        let events = BudgetEvent::created(&profile);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            BudgetEvent::AllocationChanged { to, .. } if to.needs == dec!(50)
        ));
    }

    #[test]
    fn test_unchanged_profile_has_no_events() {
        let before = sample_profile();
        let mut after = before.clone();
        after.updated_at = Utc::now();

        assert!(BudgetEvent::between(&before, &after).is_empty());
    }

    #[test]
    fn test_money_and_allocation_changes() {
        let before = sample_profile();
        let mut after = before.clone();
        after.set_income(Money::new(dec!(4500)));
        after.set_savings_balance(Money::new(dec!(1050)));
        after.set_allocations(dec!(1500), dec!(400), dec!(350), AllocationMode::Fixed);

        let events = BudgetEvent::between(&before, &after);
        assert_eq!(
            events,
            vec![
                BudgetEvent::IncomeChanged {
                    from: Money::new(dec!(4000)),
                    to: Money::new(dec!(4500)),
                },
                BudgetEvent::SavingsBalanceChanged {
                    from: Money::new(dec!(250)),
                    to: Money::new(dec!(1050)),
                },
                BudgetEvent::AllocationChanged {
                    from: before.allocation,
                    to: after.allocation,
                },
            ]
        );
    }

    #[test]
    fn test_item_lifecycle_events() {
        let before = sample_profile();
        let rent = before.needs()[0].id;
        let laptop = before.wants()[0].id;
        let trip = before.wants()[1].id;

        let mut after = before.clone();
        after.mark_item_complete(rent);
        after.remove_item(trip);
        if let Some(item) = after.item_mut(laptop) {
            item.set_cost(Money::new(dec!(1400)));
            item.set_due_date(date(2026, 4, 1));
        }
        after.add_need(FinancialItem::need("Power", Money::new(dec!(90)), date(2025, 11, 5)));

        let events = BudgetEvent::between(&before, &after);
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], BudgetEvent::ItemCompleted { item, .. } if item == rent));
        assert!(matches!(
            &events[1],
            BudgetEvent::ItemAdded { description, .. } if description == "Power"
        ));
        assert_eq!(
            events[2],
            BudgetEvent::ItemEdited {
                category: ItemCategory::Want,
                item: laptop,
                description: "Laptop".to_string(),
                edits: vec![
                    ItemEdit::Cost {
                        from: Money::new(dec!(1500)),
                        to: Money::new(dec!(1400)),
                    },
                    ItemEdit::Date {
                        from: date(2026, 3, 1),
                        to: date(2026, 4, 1),
                    },
                ],
            }
        );
        assert!(matches!(events[3], BudgetEvent::ItemRemoved { item, .. } if item == trip));
    }

    #[test]
    fn test_case_change_is_a_rename() {
        let before = sample_profile();
        let mut after = before.clone();
        after.name = "ALICE".to_string();

        assert_eq!(
            BudgetEvent::between(&before, &after),
            vec![BudgetEvent::ProfileRenamed {
                from: "Alice".to_string(),
                to: "ALICE".to_string(),
            }]
        );
    }

    #[test]
    fn test_record_serializes_tagged_event() {
        let record = AuditRecord::new(
            "Alice",
            BudgetEvent::IncomeChanged {
                from: Money::new(dec!(4000)),
                to: Money::new(dec!(4500)),
            },
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["profile"], "Alice");
        assert_eq!(value["event"]["kind"], "income_changed");
        assert_eq!(value["event"]["to"], "4500");

        let parsed: AuditRecord = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, record);
        assert!(parsed.concerns("alice"));
    }
}
