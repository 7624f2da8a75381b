use serde::{Deserialize, Serialize};

use crate::style::Rgb8;

/// One immutable entry in a card's fixed, ordered record sequence.
///
/// `display` carries a pre-formatted value for the table face and tooltip
/// ("12.1k"); when absent, callers format `value` themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display: Option<String>,
    /// Per-record fill, used by the donut chart. Cartesian charts ignore it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<Rgb8>,
}

impl DataRecord {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            display: None,
            color: None,
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn with_color(mut self, color: Rgb8) -> Self {
        self.color = Some(color);
        self
    }
}

/// A titled, immutable dataset backing one chart card.
///
/// Datasets are plain values handed to each card at construction, so tests
/// can substitute their own without touching any global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Stable identifier, usable as a file stem and an egui id source.
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    /// Column header for the record labels ("Day", "Week", "Channel").
    pub label_name: String,
    /// Column header for the record values ("Units", "Engagement", "Share").
    pub value_name: String,
    pub records: Vec<DataRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all record values (donut share denominator).
    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.value).sum()
    }

    /// Largest record value, or 0.0 for an empty dataset.
    pub fn max_value(&self) -> f64 {
        self.records.iter().map(|r| r.value).fold(0.0, f64::max)
    }
}
