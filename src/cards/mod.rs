//! Self-contained chart cards: a titled card that flips between a chart
//! face and a table face, with hover/focus-driven record emphasis.
//!
//! A card owns nothing global. The caller holds one [`CardState`] per card
//! and passes it to [`ChartCard::show`] every frame; the dataset is an
//! immutable value injected at construction.

mod chart;
pub mod flip;
pub mod hit;
mod legend;
mod table;

pub use chart::ChartKind;
pub use flip::FlipPanel;

use egui::Ui;
use num_format::Locale;

use crate::fmt;
use crate::models::{DataRecord, Dataset};
use crate::state::CardState;

/// Height shared by both faces, so the flip happens in place.
const BODY_HEIGHT: f32 = 280.0;

/// Value as shown in tables, tooltips, and legend buttons: the record's
/// pre-formatted display when it has one, locale-grouped otherwise.
pub(crate) fn value_text(record: &DataRecord, locale: &'static Locale) -> String {
    match &record.display {
        Some(d) => d.clone(),
        None => fmt::group_int(record.value, locale),
    }
}

/// One chart/table card over an immutable dataset.
pub struct ChartCard {
    dataset: Dataset,
    kind: ChartKind,
    locale_tag: String,
}

impl ChartCard {
    pub fn new(dataset: Dataset, kind: ChartKind) -> Self {
        Self {
            dataset,
            kind,
            locale_tag: "en".into(),
        }
    }

    /// Locale tag for value formatting in the table face and tooltips.
    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.locale_tag = tag.into();
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Render the card and advance its interaction state.
    pub fn show(&self, ui: &mut Ui, state: &mut CardState) {
        let locale = fmt::map_locale(&self.locale_tag);
        let card_id = egui::Id::new(("chart-card", self.dataset.slug.as_str()));
        let affordance_id = card_id.with("affordance");
        // Previous frame's "card hovered or toggle focused", used to decide
        // the toggle's visual strength before the toggle itself is laid out.
        let strong = ui
            .ctx()
            .data(|d| d.get_temp::<bool>(affordance_id))
            .unwrap_or(false);

        let group = ui.group(|ui| {
            let mut toggle_focused = false;
            let mut toggled = false;
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.strong(&self.dataset.title);
                    ui.label(egui::RichText::new(&self.dataset.subtitle).weak());
                });
                ui.with_layout(
                    egui::Layout::right_to_left(egui::Align::Min),
                    |ui| {
                        let resp = toggle_button(ui, state.shows_table(), strong);
                        toggled = resp.clicked();
                        toggle_focused = resp.has_focus() || resp.hovered();
                    },
                );
            });
            if toggled {
                state.toggle_mode();
            }

            let show_table = state.shows_table();
            let active = state.active();
            let mut chart_hit = None;
            let mut legend_hit = None;
            FlipPanel::new(card_id.with("flip"), BODY_HEIGHT).show(
                ui,
                show_table,
                |ui| {
                    chart_hit = chart::show_chart(ui, &self.dataset, active, self.kind, locale);
                    if self.kind == ChartKind::Donut {
                        legend_hit = legend::legend_row(ui, &self.dataset, active, locale);
                    }
                },
                |ui| table::table_face(ui, &self.dataset, locale),
            );

            if !state.shows_table() {
                state.apply_hover(chart_hit.or(legend_hit));
            }
            toggle_focused
        });

        let toggle_focused = group.inner;
        let card_hovered = group.response.contains_pointer();
        ui.ctx()
            .data_mut(|d| d.insert_temp(affordance_id, card_hovered || toggle_focused));
    }
}

/// The mode toggle. Always part of the UI (and so always reachable by
/// keyboard); only its visual strength follows the hover/focus affordance.
/// The label names the face it switches TO.
fn toggle_button(ui: &mut Ui, table_shown: bool, visible: bool) -> egui::Response {
    let (label, action) = if table_shown {
        ("Chart", "Show chart")
    } else {
        ("Table", "Show table")
    };
    let resp = ui
        .scope(|ui| {
            if !visible {
                ui.set_opacity(0.3);
            }
            ui.add(egui::Button::new(label).selected(table_shown))
        })
        .inner;
    resp.on_hover_text(action)
}
