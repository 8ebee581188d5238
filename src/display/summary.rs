//! Category summary display
//!
//! Renders per-category totals as a table with share percentages and a
//! bar chart. The aggregate map is the only input; rows are sorted by
//! amount (then name) purely for stable display.

use std::collections::HashMap;

use crate::models::Amount;

use super::{separator, truncate};

const BAR_WIDTH: usize = 20;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format the per-category breakdown
pub fn format_category_summary(totals: &HashMap<String, Amount>, symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut rows: Vec<(&String, Amount)> = totals.iter().map(|(name, a)| (name, *a)).collect();
    rows.sort_by(|a, b| {
        b.1.value()
            .total_cmp(&a.1.value())
            .then_with(|| a.0.cmp(b.0))
    });

    let total: Amount = rows.iter().map(|(_, a)| *a).sum();
    let max_value = rows.first().map(|(_, a)| a.value()).unwrap_or(0.0);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>12} {:>7}\n",
        "Category", "Spent", "Share"
    ));
    output.push_str(&separator(64));
    output.push('\n');

    for (name, amount) in &rows {
        let pct = if total.value() > 0.0 {
            amount.value() / total.value() * 100.0
        } else {
            0.0
        };
        output.push_str(&format!(
            "{:<20} {:>12} {:>7}  {}\n",
            truncate(name, 20),
            amount.format_with_symbol(symbol),
            format_percentage(pct),
            format_bar(amount.value(), max_value, BAR_WIDTH),
        ));
    }

    output.push_str(&separator(64));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>12}\n",
        "Total",
        total.format_with_symbol(symbol)
    ));

    output
}
