// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for formatting profile values for display.

use serde_json::Value;

/// Format an amount as Indonesian rupiah without decimals, e.g. `Rp 1.500.000`.
pub fn format_idr(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp 0".to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Up to two uppercase initials from a full name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Rating as a number in `[0, 5]`. Numeric strings are accepted; anything
/// unparseable is 0.
pub fn safe_rating(rating: &Value) -> f64 {
    let value = match rating {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 5.0),
        _ => 0.0,
    }
}

/// Rating with `decimals` places, or "Baru" (new) when there is none yet.
pub fn format_rating(rating: &Value, decimals: usize) -> String {
    let value = safe_rating(rating);
    if value > 0.0 {
        format!("{:.*}", decimals, value)
    } else {
        "Baru".to_string()
    }
}
