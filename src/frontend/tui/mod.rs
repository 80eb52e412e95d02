//! TUI frontend: terminal lifecycle, showcase screen, and control widgets

pub mod button_bar;
pub mod checkbox;
pub mod chips;
pub mod progress;
pub mod radio_group;
pub mod screen;
pub mod slider;
pub mod switch;
pub mod terminal;
pub mod text_field;

pub use terminal::TuiFrontend;
