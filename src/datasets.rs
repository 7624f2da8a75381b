//! Built-in mock datasets backing the demo cards.
//!
//! These are constructors, not globals: every call hands the card its own
//! immutable copy, and tests are free to build substitutes.

use crate::models::{DataRecord, Dataset};
use crate::style::category_color;

/// Weekly engagement counts over nine weeks (line card).
pub fn engagement_trend() -> Dataset {
    let weeks: [(u32, f64, &str); 9] = [
        (1, 12_100.0, "12.1k"),
        (2, 13_700.0, "13.7k"),
        (3, 16_900.0, "16.9k"),
        (4, 20_800.0, "20.8k"),
        (5, 19_400.0, "19.4k"),
        (6, 24_200.0, "24.2k"),
        (7, 26_100.0, "26.1k"),
        (8, 30_400.0, "30.4k"),
        (9, 32_000.0, "32.0k"),
    ];
    Dataset {
        slug: "engagement-trend".into(),
        title: "Engagement Trend (Mock)".into(),
        subtitle: "Weekly growth over nine weeks.".into(),
        label_name: "Week".into(),
        value_name: "Engagement".into(),
        records: weeks
            .iter()
            .map(|&(n, v, d)| DataRecord::new(format!("Week {n}"), v).with_display(d))
            .collect(),
    }
}

/// Units produced per weekday (bar cards).
pub fn throughput_by_day() -> Dataset {
    let days: [(&str, f64); 6] = [
        ("Mon", 44.0),
        ("Tue", 66.0),
        ("Wed", 88.0),
        ("Thu", 130.0),
        ("Fri", 108.0),
        ("Sat", 76.0),
    ];
    Dataset {
        slug: "throughput-by-day".into(),
        title: "Weekly Throughput (Mock)".into(),
        subtitle: "Bar view of output by weekday.".into(),
        label_name: "Day".into(),
        value_name: "Units".into(),
        records: days
            .iter()
            .map(|&(d, v)| DataRecord::new(d, v))
            .collect(),
    }
}

/// Relative traffic share per channel (donut card).
pub fn traffic_mix() -> Dataset {
    let channels: [(&str, f64); 3] = [("Direct", 62.0), ("Search", 22.0), ("Referral", 16.0)];
    Dataset {
        slug: "traffic-mix".into(),
        title: "Traffic Mix (Mock)".into(),
        subtitle: "Relative channel share.".into(),
        label_name: "Channel".into(),
        value_name: "Share".into(),
        records: channels
            .iter()
            .enumerate()
            .map(|(i, &(c, v))| {
                DataRecord::new(c, v)
                    .with_display(format!("{}%", v as i64))
                    .with_color(category_color(i))
            })
            .collect(),
    }
}
