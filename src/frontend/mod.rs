//! Frontend layer
//!
//! Translates native terminal events into frontend-agnostic events and
//! renders the showcase screen from published snapshots. Nothing in here
//! writes state directly; every user interaction goes back through the
//! controller.

pub mod events;
pub mod tui;

pub use events::FrontendEvent;
pub use tui::TuiFrontend;
