//! Core utilities and types for the javagen source generator.
//!
//! This crate provides the error type, identifier rules, and render
//! configuration shared by the javagen crates.

mod config;
mod error;
mod indent;
mod naming;
mod utils;

// Configuration
pub use config::{DEFAULT_IMPLICIT_PACKAGE, RenderConfig};
// Errors
pub use error::{Error, IntWidth, Result};
pub use indent::Indent;
// Identifier rules
pub use naming::{
    JAVA_KEYWORDS, identifier_problem, is_java_keyword, validate_identifier,
    validate_package_name,
};
// String utilities
pub use utils::{group_digits, quote_string};
