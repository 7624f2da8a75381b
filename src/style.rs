//! Shared color definitions for chart and legend rendering.
//!
//! One emphasis color marks the active record everywhere; everything else
//! renders in its category color (donut) or the neutral gray (bars).

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Plain RGB triple, independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }
}

/// Fill used for the currently emphasized record, in chart and legend alike.
pub const EMPHASIS: Rgb8 = Rgb8::new(68, 114, 196);

/// Default fill for non-emphasized cartesian elements.
pub const NEUTRAL: Rgb8 = Rgb8::new(107, 114, 128);

/// Near-black used for strokes and outlines.
pub const INK: Rgb8 = Rgb8::new(17, 17, 17);

/// Categorical fills for records that do not carry their own color.
/// Order matches the traffic-mix channels of the demo page.
const CATEGORY: [Rgb8; 3] = [
    Rgb8::new(17, 17, 17),    // near-black
    Rgb8::new(107, 114, 128), // gray
    Rgb8::new(212, 212, 216), // light gray
];

/// Category color for record `idx`, cycling when the palette runs out.
#[inline]
pub fn category_color(idx: usize) -> Rgb8 {
    CATEGORY[idx % CATEGORY.len()]
}

/// Stroke width for an element depending on whether it is emphasized.
#[inline]
pub fn stroke_width(active: bool) -> f32 {
    if active { 1.5 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_palette_cycles() {
        assert_eq!(category_color(0), category_color(3));
        assert_eq!(category_color(2), category_color(5));
    }

    #[test]
    fn color32_roundtrip() {
        let c = EMPHASIS.to_color32();
        assert_eq!((c.r(), c.g(), c.b()), (68, 114, 196));
    }
}
