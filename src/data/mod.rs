//! Data layer - pure state without UI coupling
//!
//! Control values (`ShowcaseState`) and view-local state (`UiState`) as
//! plain data structures. NO imports from frontend/ or rendering code; the
//! frontend reads from these to render.

pub mod showcase_state;
pub mod ui_state;

pub use showcase_state::{ShowcaseState, StateChange, RADIO_OPTIONS};
pub use ui_state::{FocusedControl, UiState};
