/*!
 * Demo page for the flipdeck chart cards.
 *
 * Stacks the three mock cards the way the content page places them:
 * engagement trend (line), weekly throughput (bar), traffic mix (donut).
 * Each card flips between its chart and its data table and highlights the
 * hovered record across chart and legend.
 */

use eframe::egui;
use flipdeck::{CardState, ChartCard, ChartKind, datasets};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 760.0])
            .with_min_inner_size([420.0, 480.0])
            .with_title("flipdeck - chart cards"),
        ..Default::default()
    };

    eframe::run_native(
        "flipdeck",
        options,
        Box::new(|_cc| Ok(Box::new(DeckApp::new()))),
    )
}

/// One entry per card on the page: the card plus its private state.
struct DeckApp {
    cards: Vec<(ChartCard, CardState)>,
}

impl DeckApp {
    fn new() -> Self {
        let cards = vec![
            (
                ChartCard::new(datasets::engagement_trend(), ChartKind::Line),
                CardState::new(),
            ),
            (
                ChartCard::new(datasets::throughput_by_day(), ChartKind::Bar),
                CardState::new(),
            ),
            (
                ChartCard::new(datasets::traffic_mix(), ChartKind::Donut),
                CardState::new(),
            ),
        ];
        Self { cards }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Chart cards");
                ui.add_space(8.0);
                for (card, state) in &mut self.cards {
                    card.show(ui, state);
                    ui.add_space(12.0);
                }
            });
        });
    }
}
