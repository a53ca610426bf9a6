//! Response payload decoding.
//!
//! The customer endpoint answers a `customer_id` query with either a bare
//! object or a list of matching rows. A list is reduced to its first row.

use custview_common::error::{CustviewError, Result};
use custview_common::types::{CustomerId, CustomerRecord};
use serde_json::Value;

/// Reduces a parsed customer API response to a single record.
///
/// # Errors
///
/// Returns `NotFound` for an empty list and `Decode` for anything that is
/// neither an object nor a list whose first element is an object.
pub fn decode_customer(url: &str, id: &CustomerId, value: Value) -> Result<CustomerRecord> {
    match value {
        Value::Object(fields) => Ok(CustomerRecord::from_map(fields)),
        Value::Array(rows) => match rows.into_iter().next() {
            None => Err(CustviewError::NotFound {
                kind: "customer",
                id: id.to_string(),
            }),
            Some(Value::Object(fields)) => Ok(CustomerRecord::from_map(fields)),
            Some(other) => Err(CustviewError::Decode {
                url: url.to_string(),
                message: format!("expected an object row, got {}", kind_of(&other)),
            }),
        },
        other => Err(CustviewError::Decode {
            url: url.to_string(),
            message: format!("expected an object or a list, got {}", kind_of(&other)),
        }),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "http://localhost:8000/customers";

    fn id() -> CustomerId {
        CustomerId::new("C110")
    }

    #[test]
    fn decode_object_body() {
        let record = decode_customer(URL, &id(), json!({"customer_id": "C110", "age": 30}))
            .expect("decode failed");
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn decode_list_takes_first_row() {
        let body = json!([{"customer_id": "C110"}, {"customer_id": "C111"}]);
        let record = decode_customer(URL, &id(), body).expect("decode failed");
        assert_eq!(record.as_map().get("customer_id"), Some(&Value::from("C110")));
    }

    #[test]
    fn decode_empty_list_is_not_found() {
        let result = decode_customer(URL, &id(), json!([]));
        assert!(matches!(result, Err(CustviewError::NotFound { .. })));
    }

    #[test]
    fn decode_scalar_is_rejected() {
        let result = decode_customer(URL, &id(), json!(42));
        assert!(matches!(result, Err(CustviewError::Decode { .. })));
    }

    #[test]
    fn decode_list_of_scalars_is_rejected() {
        let result = decode_customer(URL, &id(), json!(["C110"]));
        assert!(matches!(result, Err(CustviewError::Decode { .. })));
    }
}
