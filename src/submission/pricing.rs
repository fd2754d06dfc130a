// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! The pricing summary block appended to a listing description.
//!
//! When a submission carries `showPricing=true`, its structured rates are
//! folded into the free-text description using a fixed phrase grammar. The
//! presentation mapper's extraction patterns are the inverse of this
//! grammar, so whatever is appended here is recoverable later.

use crate::wizard::draft::{DraftPricing, RateSet};

/// Header line of the appended block.
pub const PRICING_HEADER: &str = "Preços:";

/// Amounts are integer euro values; anything else is treated as not set.
fn amount(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

fn amount_opt(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(amount)
}

fn slot(value: &str) -> String {
    match amount(value) {
        Some(n) => n.to_string(),
        None => "N/A".to_string(),
    }
}

/// Build the deterministic pricing summary block for a submission.
///
/// Layout: the `Preços:` header, one optional line per present 15/30 minute
/// rate, then the two summary lines with `N/A` placeholders for unset
/// amounts.
pub fn pricing_summary(pricing: &DraftPricing) -> String {
    let mut lines = vec![PRICING_HEADER.to_string()];

    push_short_rates(&mut lines, "Local", &pricing.local);
    push_short_rates(&mut lines, "Deslocação", &pricing.travel);

    lines.push(summary_line("Local", &pricing.local));
    lines.push(summary_line("Deslocação", &pricing.travel));

    lines.join("\n")
}

fn push_short_rates(lines: &mut Vec<String>, label: &str, rates: &RateSet) {
    if let Some(n) = amount_opt(&rates.fifteen_min) {
        lines.push(format!("{label} 15min: €{n}"));
    }
    if let Some(n) = amount_opt(&rates.thirty_min) {
        lines.push(format!("{label} 30min: €{n}"));
    }
}

fn summary_line(label: &str, rates: &RateSet) -> String {
    format!(
        "{label}: 1h €{}, 2h €{}, Pernoite €{}",
        slot(&rates.one_hour),
        slot(&rates.two_hours),
        slot(&rates.overnight),
    )
}

/// Append the pricing block to a description, separated by a blank line.
pub fn append_pricing(description: &str, pricing: &DraftPricing) -> String {
    let base = description.trim_end();
    if base.is_empty() {
        pricing_summary(pricing)
    } else {
        format!("{base}\n\n{}", pricing_summary(pricing))
    }
}

/// The listing's flat price: the local one-hour rate, or zero when unset.
pub fn flat_price(pricing: &DraftPricing) -> i32 {
    amount(&pricing.local.one_hour)
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or(0)
}
