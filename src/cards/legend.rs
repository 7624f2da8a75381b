//! Legend button row for the donut card.
//!
//! Each record gets one focusable control (swatch + label + value). Hover,
//! focus, and click all produce the same transient emphasis; the row
//! returns the record the pointer or focus indicates this frame, and the
//! card clears the emphasis once neither surface indicates anything.

use egui::{Sense, Stroke, Ui, vec2};
use num_format::Locale;

use crate::models::Dataset;
use crate::style::{self, EMPHASIS, INK};

pub(crate) fn legend_row(
    ui: &mut Ui,
    dataset: &Dataset,
    active: Option<usize>,
    locale: &'static Locale,
) -> Option<usize> {
    let mut hit = None;
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        for (i, r) in dataset.records.iter().enumerate() {
            let is_active = active == Some(i);
            let fill = if is_active {
                EMPHASIS
            } else {
                r.color.unwrap_or_else(|| style::category_color(i))
            };

            let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter()
                .rect(swatch, 0.0, fill.to_color32(), Stroke::new(1.0, INK.to_color32()));

            let text = format!("{} {}", r.label, super::value_text(r, locale));
            let resp = ui.add(egui::Button::new(text).selected(is_active));
            if resp.hovered() || resp.has_focus() || resp.clicked() {
                hit = Some(i);
            }
            ui.add_space(6.0);
        }
    });
    hit
}
