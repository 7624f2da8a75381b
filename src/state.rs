//! Per-card interaction state: which face a card shows and which record,
//! if any, is currently emphasized.
//!
//! All mutation happens synchronously inside the card's own event handling;
//! nothing here is shared across card instances.

use serde::{Deserialize, Serialize};

/// Which of the two mutually exclusive faces a card currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    Chart,
    Table,
}

impl DisplayMode {
    pub fn flipped(self) -> Self {
        match self {
            DisplayMode::Chart => DisplayMode::Table,
            DisplayMode::Table => DisplayMode::Chart,
        }
    }
}

/// State owned by a single chart card.
///
/// `active` holds the index of the emphasized record. Only one record can
/// be emphasized at a time; setting a new index replaces the previous one.
/// Callers feed indices produced by the hit-test and legend adapters, which
/// are bounded by the card's record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    mode: DisplayMode,
    active: Option<usize>,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn shows_table(&self) -> bool {
        self.mode == DisplayMode::Table
    }

    /// Flip between chart and table.
    ///
    /// The emphasis is dropped on every flip: the table face can neither
    /// show nor produce it, so re-entering the chart starts clean.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.flipped();
        self.active = None;
    }

    /// Emphasize the record at `idx`, replacing any previous emphasis.
    pub fn set_active(&mut self, idx: usize) {
        self.active = Some(idx);
    }

    /// Drop the emphasis. A no-op when nothing is emphasized.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Apply the outcome of one frame's pointer/focus resolution:
    /// `Some` emphasizes that record, `None` means nothing is hovered or
    /// focused anymore and the emphasis clears.
    pub fn apply_hover(&mut self, hit: Option<usize>) {
        match hit {
            Some(idx) => self.set_active(idx),
            None => self.clear_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_chart_with_no_emphasis() {
        let s = CardState::new();
        assert_eq!(s.mode(), DisplayMode::Chart);
        assert_eq!(s.active(), None);
    }

    #[test]
    fn toggle_parity() {
        let mut s = CardState::new();
        for n in 1..=6 {
            s.toggle_mode();
            let expect = if n % 2 == 0 {
                DisplayMode::Chart
            } else {
                DisplayMode::Table
            };
            assert_eq!(s.mode(), expect, "after {n} toggles");
        }
    }

    #[test]
    fn set_then_read_back() {
        let mut s = CardState::new();
        s.set_active(1);
        assert_eq!(s.active(), Some(1));
        s.set_active(1);
        assert_eq!(s.active(), Some(1));
    }

    #[test]
    fn new_index_replaces_previous() {
        let mut s = CardState::new();
        s.set_active(0);
        s.set_active(2);
        assert_eq!(s.active(), Some(2));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut s = CardState::new();
        s.clear_active();
        assert_eq!(s.active(), None);
        s.set_active(3);
        s.clear_active();
        s.clear_active();
        assert_eq!(s.active(), None);
    }

    #[test]
    fn toggle_drops_emphasis() {
        let mut s = CardState::new();
        s.set_active(2);
        s.toggle_mode();
        assert_eq!(s.active(), None);
        s.toggle_mode();
        assert_eq!(s.active(), None, "chart face re-entered clean");
    }

    #[test]
    fn hover_resolution_sets_and_clears() {
        let mut s = CardState::new();
        s.apply_hover(Some(1));
        assert_eq!(s.active(), Some(1));
        s.apply_hover(None);
        assert_eq!(s.active(), None);
    }
}
