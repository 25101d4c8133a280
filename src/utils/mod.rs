//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Short code generation and custom name formatting
//! - [`url_validator`] - Original URL validation and redirect targets

pub mod code_generator;
pub mod url_validator;
