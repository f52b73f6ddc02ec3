//! Need, want, and task display formatting

use crate::models::{FinancialItem, ItemCategory, Money, Profile, Projection};

fn status_marker(item: &FinancialItem) -> &'static str {
    if item.is_complete() {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Format one category's items, numbered from 1
///
/// The numbers are what the CLI accepts to address an item.
pub fn format_item_list(items: &[FinancialItem], category: ItemCategory, symbol: &str) -> String {
    let plural = match category {
        ItemCategory::Need => "needs",
        ItemCategory::Want => "wants",
    };
    if items.is_empty() {
        return format!("No {} found.", plural);
    }

    let desc_width = items
        .iter()
        .map(|i| i.description.chars().count())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<3}  {:<desc_width$}  {:>12}  {}\n",
        "#",
        "",
        "Description",
        "Cost",
        category.date_label(),
        desc_width = desc_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<3}  {:-<desc_width$}  {:->12}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        desc_width = desc_width,
    ));

    for (i, item) in items.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<3}  {:<desc_width$}  {:>12}  {}\n",
            i + 1,
            status_marker(item),
            item.description,
            item.cost.format_with_symbol(symbol),
            item.due_date.format("%Y-%m-%d"),
            desc_width = desc_width,
        ));
    }

    let total: Money = items.iter().map(|i| i.cost).sum();
    output.push_str(&format!(
        "\n{} item(s), total {}\n",
        items.len(),
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format the combined task list: needs first, then wants
pub fn format_task_list(profile: &Profile, symbol: &str) -> String {
    let tasks = profile.tasks();
    if tasks.is_empty() {
        return format!("No tasks for {}.", profile.name);
    }

    let mut output = format!("Tasks for {}\n", profile.name);
    for item in &tasks {
        output.push_str(&format!(
            "  {} [{}] {} - {} ({}: {})\n",
            status_marker(item),
            item.category,
            item.description,
            item.cost.format_with_symbol(symbol),
            item.date_label(),
            item.due_date.format("%Y-%m-%d"),
        ));
    }

    output.push_str(&format!(
        "\n{} of {} complete\n",
        profile.completed_count(),
        tasks.len()
    ));

    output
}

/// Format the outcome of a goal projection for one want
pub fn format_projection(
    want: &FinancialItem,
    profile: &Profile,
    projection: &Projection,
    symbol: &str,
) -> String {
    let remaining = want.cost - profile.savings_balance;

    let mut output = String::new();
    output.push_str(&format!("Goal: {}\n", want.description));
    output.push_str(&format!(
        "  Cost:          {}\n",
        want.cost.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Savings:       {}\n",
        profile.savings_balance.format_with_symbol(symbol)
    ));
    if remaining.is_positive() {
        output.push_str(&format!(
            "  Remaining:     {}\n",
            remaining.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!(
        "  Contribution:  {}/month\n",
        projection.monthly_contribution.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Estimate:      {}\n", projection.outcome()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile() -> Profile {
        let mut p = Profile::new("Alice", Money::new(dec!(4000)), Money::new(dec!(200)));
        let rent = p.add_need(FinancialItem::need(
            "Rent",
            Money::new(dec!(1200)),
            date(2025, 11, 1),
        ));
        p.add_want(FinancialItem::want("Laptop", Money::new(dec!(1500)), date(2026, 3, 1)));
        p.mark_item_complete(rent);
        p
    }

    #[test]
    fn test_empty_item_list() {
        assert_eq!(format_item_list(&[], ItemCategory::Want, "$"), "No wants found.");
    }

    #[test]
    fn test_item_list_numbers_and_labels() {
        let p = profile();
        let output = format_item_list(p.wants(), ItemCategory::Want, "$");

        assert!(output.contains("Target"));
        assert!(output.contains("  1  [ ]  Laptop"));
        assert!(output.contains("$1500.00"));
        assert!(output.contains("2026-03-01"));
    }

    #[test]
    fn test_task_list_order_and_status() {
        let output = format_task_list(&profile(), "$");

        let rent = output.find("Rent").unwrap();
        let laptop = output.find("Laptop").unwrap();
        assert!(rent < laptop);
        assert!(output.contains("[x] [Need] Rent - $1200.00 (Due: 2025-11-01)"));
        assert!(output.contains("[ ] [Want] Laptop - $1500.00 (Target: 2026-03-01)"));
        assert!(output.contains("1 of 2 complete"));
    }

    #[test]
    fn test_projection_output() {
        let p = profile();
        let want = &p.wants()[0];
        let projection = Projection::new(Money::new(dec!(300)), 5);

        let output = format_projection(want, &p, &projection, "$");
        assert!(output.contains("Remaining:     $1300.00"));
        assert!(output.contains("$300.00/month"));
        assert!(output.contains("5 months"));
    }
}
