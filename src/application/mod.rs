//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! holding the section-selection and submission state machine.

pub mod state;

pub use state::*;
