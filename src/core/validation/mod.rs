//! Validation and normalization system
//!
//! This module provides a declarative approach to normalizing and validating
//! record drafts before they reach a collection. Each record type declares a
//! [`Ruleset`]: per-field normalization filters (trim, lowercase, rounding)
//! followed by validators. Rules run across every field, so a caller gets
//! all field errors in one pass.

pub mod filters;
pub mod ruleset;
pub mod validators;

pub use ruleset::{FieldRule, Ruleset};
