//! # Utilities Module
//!
//! Helpers around the facade that are not part of the core logging path.

pub(crate) mod logger;

pub use logger::{setup_tracing, BarkFormatter};
