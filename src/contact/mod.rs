//! Contact form relay
//!
//! Forwards visitor contact forms to an external form-submission service.

pub mod relay;

pub use relay::{ContactConfig, ContactForm, ContactOutcome, ContactRelay};
