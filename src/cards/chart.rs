//! Chart faces: cartesian charts via egui_plot, the donut via the painter.
//!
//! Every face returns the record index under the pointer this frame (or
//! `None`), resolved through the adapters in [`super::hit`]. Emphasis uses
//! the hover hit when there is one, falling back to the card's stored
//! active index so legend-driven emphasis shows on the chart too.

use std::f32::consts::TAU;

use egui::{Color32, Mesh, Pos2, Sense, Shape, Stroke, Ui, Vec2b, vec2};
use egui_plot::{Bar, BarChart, Line, Plot, Points};
use num_format::Locale;

use super::hit;
use crate::models::Dataset;
use crate::style::{self, EMPHASIS, INK, NEUTRAL};

/// Height of the plot area inside a card face.
pub(crate) const PLOT_HEIGHT: f32 = 220.0;

const DONUT_AREA_HEIGHT: f32 = 170.0;
const DONUT_OUTER: f32 = 72.0;
const DONUT_INNER: f32 = 36.0;
/// How much the emphasized wedge grows beyond the base ring.
const DONUT_ACTIVE_GROW: f32 = 8.0;

/// Chart varieties a card can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Donut,
}

/// Render the chart face for `kind` and return this frame's hover hit.
pub(crate) fn show_chart(
    ui: &mut Ui,
    dataset: &Dataset,
    active: Option<usize>,
    kind: ChartKind,
    locale: &'static Locale,
) -> Option<usize> {
    match kind {
        ChartKind::Line => line_chart(ui, dataset, active),
        ChartKind::Bar => bar_chart(ui, dataset, active),
        ChartKind::Donut => donut_chart(ui, dataset, active, locale),
    }
}

/// Tick label for integer mark positions; fractional marks stay empty.
fn integer_tick(value: f64, labels: &[String]) -> String {
    let i = value.round();
    if (value - i).abs() > 1e-6 || i < 0.0 {
        return String::new();
    }
    labels.get(i as usize).cloned().unwrap_or_default()
}

fn base_plot(id: &str, ticks: Vec<String>) -> Plot {
    Plot::new(id)
        .height(PLOT_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .show_background(false)
        .show_grid(Vec2b::new(false, true))
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| integer_tick(mark.value, &ticks))
}

fn line_chart(ui: &mut Ui, dataset: &Dataset, active: Option<usize>) -> Option<usize> {
    let len = dataset.len();
    let points: Vec<[f64; 2]> = dataset
        .records
        .iter()
        .enumerate()
        .map(|(i, r)| [i as f64, r.value])
        .collect();
    let ticks: Vec<String> = dataset
        .records
        .iter()
        .map(|r| crate::fmt::short_week(&r.label))
        .collect();
    let resp = base_plot(dataset.slug.as_str(), ticks)
        .y_axis_formatter(|mark, _range| crate::fmt::compact(mark.value))
        .show(ui, |plot_ui| {
            let hover = plot_ui
                .response()
                .hovered()
                .then(|| plot_ui.pointer_coordinate())
                .flatten()
                .and_then(|p| hit::nearest_index(p.x, len));

            plot_ui.line(Line::new(points).color(EMPHASIS.to_color32()).width(3.0));
            if let Some(i) = hover.or(active) {
                plot_ui.points(
                    Points::new(vec![[i as f64, plot_value(dataset, i)]])
                        .radius(7.0)
                        .color(EMPHASIS.to_color32()),
                );
            }
            hover
        });

    let hover = resp.inner;
    if let Some(i) = hover {
        let r = &dataset.records[i];
        resp.response
            .on_hover_text_at_pointer(format!("{}: {}", r.label, crate::fmt::compact(r.value)));
    }
    hover
}

fn plot_value(dataset: &Dataset, i: usize) -> f64 {
    dataset.records.get(i).map(|r| r.value).unwrap_or(0.0)
}

fn bar_chart(ui: &mut Ui, dataset: &Dataset, active: Option<usize>) -> Option<usize> {
    let len = dataset.len();
    let ticks: Vec<String> = dataset.records.iter().map(|r| r.label.clone()).collect();

    let resp = base_plot(dataset.slug.as_str(), ticks)
        .y_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .show(ui, |plot_ui| {
            let hover = plot_ui
                .response()
                .hovered()
                .then(|| plot_ui.pointer_coordinate())
                .flatten()
                .and_then(|p| hit::nearest_index(p.x, len));

            let shown = hover.or(active);
            let bars: Vec<Bar> = dataset
                .records
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    let is_active = shown == Some(i);
                    let fill = if is_active { EMPHASIS } else { NEUTRAL };
                    Bar::new(i as f64, r.value)
                        .width(0.8)
                        .name(&r.label)
                        .fill(fill.to_color32())
                        .stroke(Stroke::new(style::stroke_width(is_active), INK.to_color32()))
                })
                .collect();
            plot_ui.bar_chart(
                BarChart::new(bars).element_formatter(Box::new(|bar, _chart| {
                    format!("{}: {:.0}", bar.name, bar.value)
                })),
            );
            hover
        });

    resp.inner
}

fn donut_chart(
    ui: &mut Ui,
    dataset: &Dataset,
    active: Option<usize>,
    locale: &'static Locale,
) -> Option<usize> {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(vec2(width, DONUT_AREA_HEIGHT), Sense::hover());
    let center = rect.center();
    let values: Vec<f64> = dataset.records.iter().map(|r| r.value).collect();

    let hover = response.hover_pos().and_then(|p| {
        hit::wedge_index(
            p.x - center.x,
            p.y - center.y,
            DONUT_INNER,
            DONUT_OUTER + DONUT_ACTIVE_GROW,
            &values,
        )
    });
    let shown = hover.or(active);

    let total = dataset.total();
    if total <= 0.0 {
        return None;
    }
    let painter = ui.painter_at(rect);
    let mut start = 0.0_f32;
    for (i, r) in dataset.records.iter().enumerate() {
        let frac = (r.value / total) as f32;
        if frac <= 0.0 {
            continue;
        }
        let end = start + frac * TAU;
        let is_active = shown == Some(i);
        let r_out = DONUT_OUTER + if is_active { DONUT_ACTIVE_GROW } else { 0.0 };
        let fill = if is_active {
            EMPHASIS
        } else {
            r.color.unwrap_or_else(|| style::category_color(i))
        };
        paint_wedge(
            &painter,
            center,
            DONUT_INNER,
            r_out,
            start,
            end,
            fill.to_color32(),
            Stroke::new(style::stroke_width(is_active), INK.to_color32()),
        );
        start = end;
    }

    if let Some(i) = hover {
        let r = &dataset.records[i];
        response.on_hover_text_at_pointer(format!(
            "{}: {}",
            r.label,
            super::value_text(r, locale)
        ));
    }
    hover
}

/// Ring segment from `a0` to `a1` (radians clockwise from 12 o'clock),
/// filled via a triangle-strip mesh with a closed outline on top.
#[allow(clippy::too_many_arguments)]
fn paint_wedge(
    painter: &egui::Painter,
    center: Pos2,
    r_in: f32,
    r_out: f32,
    a0: f32,
    a1: f32,
    fill: Color32,
    stroke: Stroke,
) {
    let steps = (((a1 - a0) / 0.05).ceil() as usize).max(2);
    let point = |a: f32, r: f32| center + vec2(a.sin() * r, -a.cos() * r);

    let mut mesh = Mesh::default();
    for s in 0..=steps {
        let a = a0 + (a1 - a0) * (s as f32 / steps as f32);
        mesh.colored_vertex(point(a, r_in), fill);
        mesh.colored_vertex(point(a, r_out), fill);
    }
    for s in 0..steps {
        let base = (2 * s) as u32;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }
    painter.add(Shape::mesh(mesh));

    let mut outline: Vec<Pos2> = Vec::with_capacity(2 * (steps + 1));
    for s in 0..=steps {
        outline.push(point(a0 + (a1 - a0) * (s as f32 / steps as f32), r_out));
    }
    for s in (0..=steps).rev() {
        outline.push(point(a0 + (a1 - a0) * (s as f32 / steps as f32), r_in));
    }
    painter.add(Shape::closed_line(outline, stroke));
}
