use serde_json::Value;
use shared::errors::ServiceError;
use tracing::{error, info};

const RAW_EXCERPT_CHARS: usize = 500;

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The first 500 characters of `raw`, decoded lossily.
pub fn raw_excerpt(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .chars()
        .take(RAW_EXCERPT_CHARS)
        .collect()
}

/// Accepts `raw` only when it is JSON whose top-level value is an array.
pub fn validate_product_list(raw: &[u8]) -> Result<(), ServiceError> {
    let parsed: Value = serde_json::from_slice(raw).map_err(|e| {
        error!("❌ Error parsing JSON from backend: {e}");
        ServiceError::UpstreamParse {
            message: e.to_string(),
            raw_excerpt: raw_excerpt(raw),
        }
    })?;

    if parsed.is_array() {
        info!("📦 Backend returned a product array");
        return Ok(());
    }

    let received = json_type_name(&parsed);
    error!("❌ Backend response is not an array: got {received}");

    Err(ServiceError::UpstreamShape {
        received,
        data: parsed,
        raw_excerpt: raw_excerpt(raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_payload_is_accepted() {
        assert!(validate_product_list(br#"[{"id":1}]"#).is_ok());
        assert!(validate_product_list(b"[]").is_ok());
    }

    #[test]
    fn object_payload_is_a_shape_error() {
        match validate_product_list(br#"{"foo":1}"#) {
            Err(ServiceError::UpstreamShape {
                received,
                data,
                raw_excerpt,
            }) => {
                assert_eq!(received, "object");
                assert_eq!(data, json!({ "foo": 1 }));
                assert_eq!(raw_excerpt, r#"{"foo":1}"#);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn scalar_payloads_report_their_type() {
        for (raw, expected) in [
            (&b"\"hi\""[..], "string"),
            (&b"42"[..], "number"),
            (&b"true"[..], "boolean"),
            (&b"null"[..], "null"),
        ] {
            match validate_product_list(raw) {
                Err(ServiceError::UpstreamShape { received, .. }) => {
                    assert_eq!(received, expected)
                }
                other => panic!("unexpected result for {expected}: {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_json_is_a_parse_error_with_excerpt() {
        let raw = format!("<html>{}</html>", "x".repeat(1000));

        match validate_product_list(raw.as_bytes()) {
            Err(ServiceError::UpstreamParse {
                message,
                raw_excerpt,
            }) => {
                assert!(!message.is_empty());
                assert_eq!(raw_excerpt.chars().count(), 500);
                assert!(raw_excerpt.starts_with("<html>"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let raw = "é".repeat(600);

        assert_eq!(raw_excerpt(raw.as_bytes()), "é".repeat(500));
    }
}
