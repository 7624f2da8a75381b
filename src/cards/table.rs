//! Tabular face: the same records as the chart, two columns, scrollable.

use egui::Ui;
use num_format::Locale;

use crate::models::Dataset;

pub(crate) fn table_face(ui: &mut Ui, dataset: &Dataset, locale: &'static Locale) {
    egui::ScrollArea::vertical()
        .id_salt((dataset.slug.as_str(), "table-scroll"))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new((dataset.slug.as_str(), "table"))
                .num_columns(2)
                .striped(true)
                .min_col_width(96.0)
                .show(ui, |ui| {
                    ui.strong(&dataset.label_name);
                    ui.strong(&dataset.value_name);
                    ui.end_row();
                    for r in &dataset.records {
                        ui.label(&r.label);
                        ui.label(super::value_text(r, locale));
                        ui.end_row();
                    }
                });
        });
}
