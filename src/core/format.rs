use serde::{Deserialize, Serialize};

/// Locale used for on-chart number display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumberLocale {
    /// `12,345.6`
    #[default]
    EnUs,
    /// `12.345,6`
    EsEs,
}

impl NumberLocale {
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }

    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }
}

/// Full localized form with thousands grouping and at most two decimals.
#[must_use]
pub fn format_number(value: f64, locale: NumberLocale) -> String {
    localize(value, 2, locale)
}

/// Compact form: `K` from 1,000 and `M` from 1,000,000, one decimal.
#[must_use]
pub fn format_compact(value: f64, locale: NumberLocale) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        return format!("{}M", localize(value / 1_000_000.0, 1, locale));
    }
    if magnitude >= 1_000.0 {
        let thousands = value / 1_000.0;
        // 999,950 would otherwise print as "1000K".
        if round_to(thousands.abs(), 1) >= 1_000.0 {
            return format!("{}M", localize(value / 1_000_000.0, 1, locale));
        }
        return format!("{}K", localize(thousands, 1, locale));
    }
    localize(value, 1, locale)
}

/// Percentage with one decimal, e.g. `12.5%`.
#[must_use]
pub fn format_percentage(percentage: f64, locale: NumberLocale) -> String {
    format!("{}%", localize(percentage, 1, locale))
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn localize(value: f64, max_decimals: usize, locale: NumberLocale) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }

    let text = format!("{:.max_decimals$}", value.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(locale.group_separator());
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push(locale.decimal_separator());
        grouped.push_str(fraction);
    }

    let is_zero = grouped.chars().all(|c| c == '0' || !c.is_ascii_digit());
    if value.is_sign_negative() && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}
