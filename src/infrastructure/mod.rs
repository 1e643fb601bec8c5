//! Infrastructure layer providing external service integrations.
//!
//! This module contains the hosted record store client, the background
//! submission worker, and store endpoint configuration.

pub mod config;
pub mod store;
pub mod worker;

pub use config::*;
pub use store::*;
pub use worker::*;
