//! Business-logic services that run outside the pure scheduling core.

pub mod validation;

pub use validation::{validate_roster, ValidationIssue, ValidationReport};
