/*!
 * Headless rendering tests for the chart cards.
 *
 * These drive the widgets through egui frames without a display: they
 * catch panics in layout/paint paths and pin the state behavior that
 * rendering must not disturb.
 */

use egui::{Rect, RawInput, pos2, vec2};
use flipdeck::{CardState, ChartCard, ChartKind, DisplayMode, datasets};

fn run_frame(ctx: &egui::Context, t: f64, card: &ChartCard, state: &mut CardState) {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(640.0, 900.0))),
        time: Some(t),
        ..Default::default()
    };
    ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            card.show(ui, state);
        });
    });
}

fn demo_cards() -> Vec<ChartCard> {
    vec![
        ChartCard::new(datasets::engagement_trend(), ChartKind::Line),
        ChartCard::new(datasets::throughput_by_day(), ChartKind::Bar),
        ChartCard::new(datasets::traffic_mix(), ChartKind::Donut),
    ]
}

#[test]
fn every_card_kind_renders_without_input() {
    for card in demo_cards() {
        let ctx = egui::Context::default();
        let mut state = CardState::new();
        for i in 0..3 {
            run_frame(&ctx, i as f64 * 0.05, &card, &mut state);
        }
        // Rendering alone never flips the mode or invents an emphasis.
        assert_eq!(state.mode(), DisplayMode::Chart);
        assert_eq!(state.active(), None);
    }
}

#[test]
fn both_faces_render_through_a_flip() {
    for card in demo_cards() {
        let ctx = egui::Context::default();
        let mut state = CardState::new();
        run_frame(&ctx, 0.0, &card, &mut state);

        // Flip to the table and keep rendering through the transition
        // window; frames mid-fade draw both faces.
        state.toggle_mode();
        for i in 1..=10 {
            run_frame(&ctx, i as f64 * 0.05, &card, &mut state);
        }
        assert_eq!(state.mode(), DisplayMode::Table);

        // And back again; the chart face re-enters with no emphasis.
        state.toggle_mode();
        for i in 11..=20 {
            run_frame(&ctx, i as f64 * 0.05, &card, &mut state);
        }
        assert_eq!(state.mode(), DisplayMode::Chart);
        assert_eq!(state.active(), None);
    }
}

#[test]
fn rapid_toggling_settles_on_latest_value() {
    let card = ChartCard::new(datasets::throughput_by_day(), ChartKind::Bar);
    let ctx = egui::Context::default();
    let mut state = CardState::new();

    // Several toggles inside one transition duration.
    for i in 0..5 {
        state.toggle_mode();
        run_frame(&ctx, i as f64 * 0.02, &card, &mut state);
    }
    assert_eq!(state.mode(), DisplayMode::Table, "odd number of toggles");

    // Let the animation settle; the latest state is the one presented.
    for i in 0..10 {
        run_frame(&ctx, 0.1 + i as f64 * 0.1, &card, &mut state);
    }
    assert_eq!(state.mode(), DisplayMode::Table);
}
