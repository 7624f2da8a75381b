//! Number formatting for tables, ticks, and tooltips.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a num-format locale.
/// Supported tags (case-insensitive): "en", "de", "fr", "es", "it", "pt", "nl".
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Group an already-rounded value with locale thousands separators
/// ("30,400" for en, "30.400" for de).
pub fn group_int(value: f64, locale: &Locale) -> String {
    (value.round() as i64).to_formatted_string(locale)
}

/// Compact thousands form used by the engagement card: 12100 -> "12.1k".
/// Values below 1000 keep their plain integer form.
pub fn compact(value: f64) -> String {
    if value.abs() < 1000.0 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}k", value / 1000.0)
    }
}

/// Shorten an axis label like "Week 3" to "W3"; anything else is unchanged.
pub fn short_week(label: &str) -> String {
    match label.strip_prefix("Week ") {
        Some(rest) => format!("W{rest}"),
        None => label.to_string(),
    }
}
