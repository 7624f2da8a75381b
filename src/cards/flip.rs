//! Two-faced panel with an externally-owned selector and a crossfade.
//!
//! The panel holds no logical state: the caller owns the boolean and the
//! panel merely presents one of two faces in the same rectangle. The fade
//! runs on egui's animated-bool primitive, which retargets mid-animation,
//! so rapid toggling settles on the latest value with nothing queued.
//! Interactivity always follows the current boolean, never the animation
//! progress: the selected face accepts input from the first frame, the
//! other face is drawn disabled while it fades and is skipped entirely
//! once fully transparent.

use egui::{Align, Layout, Rect, Sense, Ui, UiBuilder, vec2};

/// Seconds for a full front/back crossfade.
const FLIP_SECONDS: f32 = 0.35;

pub struct FlipPanel {
    id: egui::Id,
    height: f32,
}

impl FlipPanel {
    /// `id_source` must be stable across frames for the animation to track.
    pub fn new(id_source: impl std::hash::Hash, height: f32) -> Self {
        Self {
            id: egui::Id::new(id_source),
            height,
        }
    }

    /// Render the panel. `show_back = false` selects `front`.
    pub fn show(
        self,
        ui: &mut Ui,
        show_back: bool,
        front: impl FnOnce(&mut Ui),
        back: impl FnOnce(&mut Ui),
    ) {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(vec2(width, self.height), Sense::hover());

        // 0.0 = fully front, 1.0 = fully back; retargets on toggle.
        let t = ui
            .ctx()
            .animate_bool_with_time(self.id, show_back, FLIP_SECONDS);

        // Fading face first so the selected face paints and interacts on top.
        if show_back {
            if t < 1.0 {
                face(ui, rect, "front", 1.0 - t, false, front);
            }
            face(ui, rect, "back", t, true, back);
        } else {
            if t > 0.0 {
                face(ui, rect, "back", t, false, back);
            }
            face(ui, rect, "front", 1.0 - t, true, front);
        }
    }
}

fn face(
    ui: &mut Ui,
    rect: Rect,
    salt: &str,
    opacity: f32,
    interactive: bool,
    add: impl FnOnce(&mut Ui),
) {
    let mut child = ui.new_child(
        UiBuilder::new()
            .max_rect(rect)
            .id_salt(salt)
            .layout(Layout::top_down(Align::Min)),
    );
    child.set_clip_rect(rect.intersect(child.clip_rect()));
    child.set_opacity(opacity);
    if !interactive {
        child.disable();
    }
    add(&mut child);
}
