//! Error types and error reporting for the syntax analysis stage.
//!
//! This module defines:
//!
//! - Error structures carrying the source line they were detected on
//! - Specific error variants for the grammar violations the parser detects
//! - Helpful suggestions attached to each variant
//! - The `ErrorReporter` that records diagnostics and forwards them to a sink

pub mod errors;
pub mod reporter;
