//! Foundation module - Core utilities and types
//!
//! - Logging setup
//! - Projection math

pub mod logging;
pub mod math;
