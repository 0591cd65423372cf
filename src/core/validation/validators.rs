//! Reusable field validators
//!
//! These validators run against the JSON form of a payload before it is
//! handed to the store, so a bad form never turns into a failed network
//! call.

use serde_json::Value;

/// Validator: field is required (not null)
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            Err(format!("Le champ '{}' est requis", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: number must be positive
pub fn positive() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(num) = value.as_f64() {
            if num <= 0.0 {
                Err(format!(
                    "Le champ '{}' doit être positif (valeur: {})",
                    field, num
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(()) // Si ce n'est pas un nombre, on laisse passer (autre validateur gérera)
        }
    }
}

/// Validator: value must be one of an allowed list of strings
pub fn in_list(
    allowed: Vec<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if allowed.iter().any(|a| a == s) {
                Ok(())
            } else {
                Err(format!(
                    "'{}' doit être l'une des valeurs: {:?} (valeur actuelle: {})",
                    field, allowed, s
                ))
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: date must match format
pub fn date_format(
    format: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            match chrono::NaiveDate::parse_from_str(s, format) {
                Ok(_) => Ok(()),
                Err(_) => Err(format!(
                    "'{}' doit être au format {} (valeur actuelle: {})",
                    field, format, s
                )),
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must not be empty
pub fn non_empty() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if s.is_empty() {
                Err(format!("Le champ '{}' ne doit pas être vide", field))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === required() ===

    #[test]
    fn test_required_null_value_returns_error() {
        let v = required();
        let result = v("date", &json!(null));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("requis"));
    }

    #[test]
    fn test_required_string_value_returns_ok() {
        let v = required();
        assert!(v("date", &json!("2004-04-04")).is_ok());
    }

    #[test]
    fn test_required_number_value_returns_ok() {
        let v = required();
        assert!(v("amount", &json!(400)).is_ok());
    }

    // === positive() ===

    #[test]
    fn test_positive_negative_number_returns_error() {
        let v = positive();
        let result = v("amount", &json!(-5.0));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("positif"));
    }

    #[test]
    fn test_positive_zero_returns_error() {
        let v = positive();
        assert!(v("amount", &json!(0.0)).is_err());
    }

    #[test]
    fn test_positive_positive_number_returns_ok() {
        let v = positive();
        assert!(v("amount", &json!(42.5)).is_ok());
    }

    #[test]
    fn test_positive_non_number_passthrough() {
        let v = positive();
        assert!(v("name", &json!("hello")).is_ok());
    }

    // === in_list() ===

    #[test]
    fn test_in_list_value_in_list_returns_ok() {
        let v = in_list(vec!["Transports".into(), "Hôtel et logement".into()]);
        assert!(v("type", &json!("Transports")).is_ok());
    }

    #[test]
    fn test_in_list_value_not_in_list_returns_error() {
        let v = in_list(vec!["Transports".into(), "Hôtel et logement".into()]);
        let result = v("type", &json!("Casino"));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("valeurs"));
    }

    #[test]
    fn test_in_list_non_string_passthrough() {
        let v = in_list(vec!["Transports".into()]);
        assert!(v("type", &json!(42)).is_ok());
    }

    // === date_format() ===

    #[test]
    fn test_date_format_valid_date_returns_ok() {
        let v = date_format("%Y-%m-%d");
        assert!(v("date", &json!("2004-04-04")).is_ok());
    }

    #[test]
    fn test_date_format_invalid_date_returns_error() {
        let v = date_format("%Y-%m-%d");
        let result = v("date", &json!("not-a-date"));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("format"));
    }

    #[test]
    fn test_date_format_non_string_passthrough() {
        let v = date_format("%Y-%m-%d");
        assert!(v("date", &json!(12345)).is_ok());
    }

    // === non_empty() ===

    #[test]
    fn test_non_empty_rejects_empty_string() {
        let v = non_empty();
        assert!(v("fileName", &json!("")).is_err());
    }

    #[test]
    fn test_non_empty_accepts_value() {
        let v = non_empty();
        assert!(v("fileName", &json!("hello.png")).is_ok());
    }
}
