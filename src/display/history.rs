//! Budget history formatting

use crate::audit::{AuditRecord, BudgetEvent, ItemEdit};
use crate::models::{AllocationSettings, ItemCategory, Money};

fn format_split(allocation: &AllocationSettings, symbol: &str) -> String {
    if allocation.is_by_percentage() {
        format!("{}% / {}% / {}%", allocation.needs, allocation.wants, allocation.savings)
    } else {
        format!(
            "{} / {} / {}",
            Money::new(allocation.needs).format_with_symbol(symbol),
            Money::new(allocation.wants).format_with_symbol(symbol),
            Money::new(allocation.savings).format_with_symbol(symbol),
        )
    }
}

fn format_edit(edit: &ItemEdit, category: ItemCategory, symbol: &str) -> String {
    match edit {
        ItemEdit::Description { from, to } => format!("description '{}' -> '{}'", from, to),
        ItemEdit::Cost { from, to } => format!(
            "cost {} -> {}",
            from.format_with_symbol(symbol),
            to.format_with_symbol(symbol)
        ),
        ItemEdit::Date { from, to } => format!(
            "{} {} -> {}",
            category.date_label().to_lowercase(),
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d")
        ),
    }
}

/// One-line description of an event
pub fn describe_event(event: &BudgetEvent, symbol: &str) -> String {
    let money = |m: &Money| m.format_with_symbol(symbol);

    match event {
        BudgetEvent::ProfileCreated {
            income,
            savings_balance,
        } => format!(
            "profile created (income {}, savings {})",
            money(income),
            money(savings_balance)
        ),
        BudgetEvent::ProfileDeleted {
            needs,
            wants,
            savings_balance,
        } => format!(
            "profile deleted ({} needs, {} wants, savings {})",
            needs,
            wants,
            money(savings_balance)
        ),
        BudgetEvent::ProfileRenamed { from, to } => format!("renamed '{}' -> '{}'", from, to),
        BudgetEvent::IncomeChanged { from, to } => {
            format!("income {} -> {}", money(from), money(to))
        }
        BudgetEvent::SavingsBalanceChanged { from, to } => {
            let delta = *to - *from;
            let sign = if delta.is_negative() { "" } else { "+" };
            format!(
                "savings balance {} -> {} ({}{})",
                money(from),
                money(to),
                sign,
                money(&delta)
            )
        }
        BudgetEvent::AllocationChanged { from, to } => format!(
            "allocation {} ({}) -> {} ({})",
            format_split(from, symbol),
            from.mode,
            format_split(to, symbol),
            to.mode
        ),
        BudgetEvent::ItemAdded {
            category,
            description,
            cost,
            date,
            ..
        } => format!(
            "{} added: {} {} ({}: {})",
            category,
            description,
            money(cost),
            category.date_label(),
            date.format("%Y-%m-%d")
        ),
        BudgetEvent::ItemCompleted {
            category,
            description,
            ..
        } => format!("{} completed: {}", category, description),
        BudgetEvent::ItemEdited {
            category,
            description,
            edits,
            ..
        } => {
            let changes: Vec<_> = edits
                .iter()
                .map(|edit| format_edit(edit, *category, symbol))
                .collect();
            format!("{} edited: {} ({})", category, description, changes.join("; "))
        }
        BudgetEvent::ItemRemoved {
            category,
            description,
            ..
        } => format!("{} removed: {}", category, description),
    }
}

/// History lines, oldest first
pub fn format_history(records: &[AuditRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No history recorded.".to_string();
    }

    records
        .iter()
        .map(|record| {
            format!(
                "{}  {}: {}\n",
                record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                record.profile,
                describe_event(&record.event, symbol)
            )
        })
        .collect()
}
