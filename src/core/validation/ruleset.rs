//! Declarative per-record validation rulesets

use anyhow::Result;
use serde_json::Value;

use crate::core::error::ValidationErrors;

/// A normalization filter: transforms a field value before validation.
/// The transformed value is what gets stored.
pub type FieldFilter = Box<dyn Fn(&str, Value) -> Result<Value> + Send + Sync>;

/// A field validator: checks a (normalized) field value, returning a
/// human-readable message on failure.
pub type FieldValidator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Filters and validators for one field
pub struct FieldRule {
    field: &'static str,
    filters: Vec<FieldFilter>,
    checks: Vec<FieldValidator>,
}

impl FieldRule {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            filters: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Add a normalization filter, applied in declaration order
    pub fn filter(
        mut self,
        filter: impl Fn(&str, Value) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a validator, applied in declaration order.
    /// The first failing validator decides the field's error message.
    pub fn check(
        mut self,
        validator: impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.checks.push(Box::new(validator));
        self
    }
}

/// The validation ruleset for one record type.
///
/// `apply` normalizes and validates a draft serialized as a JSON object.
/// Fields without a rule pass through untouched. Errors are collected across
/// ALL fields (one message per field) so the caller can display them
/// simultaneously.
#[derive(Default)]
pub struct Ruleset {
    rules: Vec<FieldRule>,
}

impl Ruleset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Normalize and validate a draft payload.
    ///
    /// On success returns the payload with normalized field values written
    /// back. On failure returns the full per-field error map; the payload is
    /// discarded.
    pub fn apply(&self, payload: Value) -> Result<Value, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let Value::Object(mut map) = payload else {
            errors.insert("payload", "Expected an object payload");
            return Err(errors);
        };

        for rule in &self.rules {
            let mut value = map.get(rule.field).cloned().unwrap_or(Value::Null);

            let mut filter_failed = false;
            for filter in &rule.filters {
                match filter(rule.field, value) {
                    Ok(filtered) => value = filtered,
                    Err(e) => {
                        errors.insert(rule.field, e.to_string());
                        filter_failed = true;
                        value = Value::Null;
                        break;
                    }
                }
            }
            if filter_failed {
                continue;
            }

            map.insert(rule.field.to_string(), value.clone());

            for check in &rule.checks {
                if let Err(message) = check(rule.field, &value) {
                    errors.insert(rule.field, message);
                    break;
                }
            }
        }

        if errors.is_empty() {
            Ok(Value::Object(map))
        } else {
            Err(errors)
        }
    }
}
