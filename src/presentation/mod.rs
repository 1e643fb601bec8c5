//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the profile, navigation and section modals using
//! ratatui, and dispatches keyboard input into the state machine.

pub mod input;
pub mod ui;

pub use input::*;
pub use ui::*;
