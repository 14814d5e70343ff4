use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Map, Number, Value};

/// Every validation and lookup failure renders through here, so error
/// bodies always carry the same `{ status, message }` shape.
pub fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (
        status,
        Json(json!({ "status": status.as_u16(), "message": message })),
    )
        .into_response()
}

/// The `data` object request bodies are expected to wrap their payload
/// in. Anything else under `data`, or no `data` at all, is a malformed
/// request.
pub fn data_object(body: &Value) -> Option<&Map<String, Value>> {
    body.get("data")?.as_object()
}

/// A value counts as present unless it is missing, null, false, zero
/// or an empty string. Arrays and objects always count, even empty
/// ones.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(value) => value.as_f64() != Some(0.0),
        Value::String(value) => !value.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn is_present(data: &Map<String, Value>, field: &str) -> bool {
    data.get(field).is_some_and(is_truthy)
}

pub fn non_empty_string<'a>(data: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

pub fn positive_number<'a>(data: &'a Map<String, Value>, field: &str) -> Option<&'a Number> {
    data.get(field)
        .and_then(Value::as_number)
        .filter(|number| number.as_f64().is_some_and(|value| value > 0.0))
}

/// Renders a body-supplied id for an error message. String ids appear
/// bare, anything else in its JSON form.
pub fn id_for_message(value: &Value) -> String {
    match value {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().expect("expected an object").clone()
    }

    #[test]
    fn truthiness_follows_the_request_contract() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-2)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn is_present_treats_missing_and_falsy_alike() {
        let data = data(json!({ "name": "", "price": 0, "dishes": [] }));

        assert!(!is_present(&data, "name"));
        assert!(!is_present(&data, "price"));
        assert!(!is_present(&data, "missing"));
        assert!(is_present(&data, "dishes"));
    }

    #[test]
    fn data_object_requires_an_object_under_data() {
        assert!(data_object(&json!({ "data": { "name": "x" } })).is_some());
        assert!(data_object(&json!({ "data": {} })).is_some());

        assert!(data_object(&json!({})).is_none());
        assert!(data_object(&json!({ "data": null })).is_none());
        assert!(data_object(&json!({ "data": [1, 2] })).is_none());
        assert!(data_object(&json!({ "data": "text" })).is_none());
        assert!(data_object(&json!(null)).is_none());
    }

    #[test]
    fn non_empty_string_rejects_other_types() {
        let data = data(json!({ "name": "Pasta", "empty": "", "number": 4 }));

        assert_eq!(non_empty_string(&data, "name"), Some("Pasta"));
        assert_eq!(non_empty_string(&data, "empty"), None);
        assert_eq!(non_empty_string(&data, "number"), None);
        assert_eq!(non_empty_string(&data, "missing"), None);
    }

    #[test]
    fn positive_number_rejects_zero_negatives_and_strings() {
        let data = data(json!({
            "price": 12,
            "fraction": 0.5,
            "zero": 0,
            "negative": -3,
            "text": "12",
        }));

        assert_eq!(positive_number(&data, "price"), Some(&Number::from(12)));
        assert!(positive_number(&data, "fraction").is_some());
        assert_eq!(positive_number(&data, "zero"), None);
        assert_eq!(positive_number(&data, "negative"), None);
        assert_eq!(positive_number(&data, "text"), None);
        assert_eq!(positive_number(&data, "missing"), None);
    }

    #[test]
    fn ids_render_bare_for_strings_only() {
        assert_eq!(id_for_message(&json!("abc")), "abc");
        assert_eq!(id_for_message(&json!(42)), "42");
        assert_eq!(id_for_message(&json!(true)), "true");
        assert_eq!(id_for_message(&json!(null)), "null");
    }
}
