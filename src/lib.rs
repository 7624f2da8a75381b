//! flipdeck
//!
//! Interactive chart cards for a content-driven page: each card flips
//! between a chart face and a table face, and emphasizes one record at a
//! time across chart and legend. Pairs with the `flipdeck` CLI and the
//! `flipdeck-gui` demo app.
//!
//! ### Features
//! - Chart/table flip with a bounded crossfade; only the visible face
//!   accepts input
//! - Hover/focus-driven record emphasis, synchronized between chart and
//!   legend
//! - Line, bar, and donut cards over injected immutable datasets
//! - Post front-matter schema (title, optional author, date, optional
//!   description) with hard validation failures
//! - CSV/JSON export of any dataset's records
//!
//! ### Example
//! ```
//! use flipdeck::{CardState, DisplayMode, datasets};
//!
//! let deck = datasets::throughput_by_day();
//! let mut state = CardState::new();
//! state.set_active(1);
//! assert_eq!(deck.records[1].label, "Tue");
//! state.toggle_mode();
//! assert_eq!(state.mode(), DisplayMode::Table);
//! assert_eq!(state.active(), None);
//! ```

pub mod cards;
pub mod content;
pub mod datasets;
pub mod fmt;
pub mod models;
pub mod state;
pub mod storage;
pub mod style;

pub use cards::{ChartCard, ChartKind, FlipPanel};
pub use content::PostMeta;
pub use models::{DataRecord, Dataset};
pub use state::{CardState, DisplayMode};
