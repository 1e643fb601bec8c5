//! folio - Terminal Portfolio Library
//!
//! A terminal-based personal portfolio with modal content sections and
//! record submission to a hosted store, built in Rust.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::*;
pub use domain::*;
