//! Core logic layer - state ownership and input routing
//!
//! This module contains the observable store, the controller that mediates
//! every state write, and the keyboard router. NO imports from frontend/ or
//! rendering code; the frontend reads published snapshots and renders.

pub mod actions;
pub mod controller;
pub mod input_router;
pub mod observable;

pub use actions::ControlAction;
pub use controller::ShowcaseController;
pub use observable::{Observable, Subscription};
