//! Reusable field validators
//!
//! Each validator takes the error message it should report, so rulesets can
//! surface the exact wording their forms display. Validators see the
//! normalized value (after filters) and return the message on failure.

use serde_json::Value;

use crate::core::field::FieldFormat;

/// Validator: field must be present, and non-empty after trimming if text
pub fn required(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        let missing = match value {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        };
        if missing {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator: field must be a number greater than zero.
/// A missing or non-numeric value fails with the same message.
pub fn positive(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value.as_f64() {
        Some(num) if num > 0.0 => Ok(()),
        _ => Err(message.to_string()),
    }
}

/// Validator: field must be a number greater than or equal to zero.
/// A missing or non-numeric value fails with the same message.
pub fn non_negative(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value.as_f64() {
        Some(num) if num >= 0.0 => Ok(()),
        _ => Err(message.to_string()),
    }
}

/// Validator: non-empty strings must match the email shape.
/// Empty or missing values pass; pair with [`required`] to demand presence.
pub fn email_format(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            let s = s.trim();
            if !s.is_empty() && !FieldFormat::Email.matches_str(s) {
                return Err(message.to_string());
            }
        }
        Ok(())
    }
}

/// Validator: string value must be one of the allowed values.
/// Non-string values pass; pair with [`required`] to demand presence.
pub fn one_of(
    allowed: &'static [&'static str],
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if !s.trim().is_empty() && !allowed.contains(&s) {
                return Err(message.to_string());
            }
        }
        Ok(())
    }
}

/// Validator: field must be a list with at least one entry
pub fn non_empty_list(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value.as_array() {
        Some(items) if !items.is_empty() => Ok(()),
        _ => Err(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === required() ===

    #[test]
    fn test_required_null_fails() {
        let v = required("Name is required");
        assert_eq!(
            v("name", &json!(null)).unwrap_err(),
            "Name is required"
        );
    }

    #[test]
    fn test_required_whitespace_string_fails() {
        let v = required("Name is required");
        assert!(v("name", &json!("   ")).is_err());
    }

    #[test]
    fn test_required_text_passes() {
        let v = required("Name is required");
        assert!(v("name", &json!("Coffee Mug")).is_ok());
    }

    #[test]
    fn test_required_number_passes() {
        let v = required("Stock is required");
        assert!(v("stock", &json!(0)).is_ok());
    }

    // === positive() / non_negative() ===

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        let v = positive("Price must be a positive number");
        assert!(v("price", &json!(0)).is_err());
        assert!(v("price", &json!(-5.0)).is_err());
        assert!(v("price", &json!(19.99)).is_ok());
    }

    #[test]
    fn test_positive_rejects_missing_and_non_numeric() {
        let v = positive("Price must be a positive number");
        assert!(v("price", &json!(null)).is_err());
        assert!(v("price", &json!("abc")).is_err());
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        let v = non_negative("Current stock must be a non-negative number");
        assert!(v("current_stock", &json!(0)).is_ok());
        assert!(v("current_stock", &json!(-1)).is_err());
        assert!(v("current_stock", &json!(null)).is_err());
    }

    // === email_format() ===

    #[test]
    fn test_email_format_rejects_malformed() {
        let v = email_format("Invalid email format");
        assert!(v("email", &json!("not-an-email")).is_err());
        assert!(v("email", &json!("sarah@fashionwholesale.com")).is_ok());
    }

    #[test]
    fn test_email_format_skips_empty() {
        // presence is required()'s job
        let v = email_format("Invalid email format");
        assert!(v("email", &json!("")).is_ok());
        assert!(v("email", &json!(null)).is_ok());
    }

    // === one_of() ===

    #[test]
    fn test_one_of_accepts_member() {
        let v = one_of(&["Credit Card", "PayPal"], "Payment method is not recognized");
        assert!(v("payment_method", &json!("PayPal")).is_ok());
    }

    #[test]
    fn test_one_of_rejects_non_member() {
        let v = one_of(&["Credit Card", "PayPal"], "Payment method is not recognized");
        assert!(v("payment_method", &json!("Barter")).is_err());
    }

    #[test]
    fn test_one_of_skips_empty_and_non_string() {
        let v = one_of(&["Credit Card"], "Payment method is not recognized");
        assert!(v("payment_method", &json!("")).is_ok());
        assert!(v("payment_method", &json!(42)).is_ok());
    }

    // === non_empty_list() ===

    #[test]
    fn test_non_empty_list_rejects_empty_and_missing() {
        let v = non_empty_list("Order must contain at least one item");
        assert!(v("items", &json!([])).is_err());
        assert!(v("items", &json!(null)).is_err());
        assert!(v("items", &json!([{"product_id": 1}])).is_ok());
    }
}
