use serde_json::{Number, Value};

use crate::error::ServiceError;

const REQUIRED_FIELDS: [&str; 4] = ["title", "price", "description", "contact"];

/// Validated input for creating a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub title: String,
    pub price: Number,
    pub description: String,
    pub contact: String,
    pub image_url: String,
}

impl NewListing {
    /// Validate a raw JSON body.
    ///
    /// A required field counts as missing when it is absent or falsy:
    /// `null`, `false`, `0`, or `""`. A price of `0` is therefore rejected.
    pub fn from_json(body: &Value) -> Result<Self, ServiceError> {
        let present = REQUIRED_FIELDS
            .iter()
            .all(|field| body.get(field).map(is_truthy).unwrap_or(false));
        if !present {
            return Err(missing());
        }

        let price = coerce_price(&body["price"])
            .ok_or_else(|| ServiceError::Validation("price must be a number".into()))?;

        let image_url = match body.get("imageUrl") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(url)) => url.clone(),
            Some(_) => return Err(ServiceError::Validation("imageUrl must be a string".into())),
        };

        Ok(Self {
            title: required_string(body, "title")?,
            price,
            description: required_string(body, "description")?,
            contact: required_string(body, "contact")?,
            image_url,
        })
    }
}

/// JavaScript-style truthiness for a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn missing() -> ServiceError {
    ServiceError::Validation("Missing required fields".into())
}

fn required_string(body: &Value, field: &str) -> Result<String, ServiceError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ServiceError::Validation(format!("{} must be a string", field))),
        None => Err(missing()),
    }
}

fn coerce_price(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::Bool(true) => Some(Number::from(1)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Some(Number::from(0));
            }
            if let Ok(int) = trimmed.parse::<i64>() {
                return Some(Number::from(int));
            }
            let float = trimmed.parse::<f64>().ok()?;
            if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
                return Some(Number::from(float as i64));
            }
            Number::from_f64(float)
        }
        _ => None,
    }
}
