//! Response classification
//!
//! Turns whatever the transport produced into either a decoded JSON payload
//! or exactly one [`ApiFault`]. Checked in this order:
//!
//! 1. connection failure -> `ConnectionFault`
//! 2. timeout -> `TimeoutFault`
//! 3. status in `[200, 400)` -> decoded body, or `{}` if the body is not JSON
//! 4. 404 -> `NotFound`
//! 5. 401 / 403 -> `AuthFailure`
//! 6. 400 -> `Validation`
//! 7. >= 500 -> `ServerFault`
//! 8. any other status -> `Validation`
//!
//! Nothing here retries or recovers. The only softening is step 3: a
//! success status with an undecodable body is not a fault.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiFault, Error, Result};
use crate::transport::{RawResponse, TransportError};

/// Classify a transport outcome
pub fn classify(
    outcome: std::result::Result<RawResponse, TransportError>,
) -> std::result::Result<Value, ApiFault> {
    match outcome {
        Ok(response) => classify_response(response),
        Err(TransportError::Connect(message)) => {
            tracing::error!(%message, "Connection error");
            Err(ApiFault::ConnectionFault { message })
        }
        Err(TransportError::Timeout(message)) => {
            tracing::error!(%message, "Request timed out");
            Err(ApiFault::TimeoutFault { message })
        }
        Err(TransportError::Request(message)) => {
            tracing::error!(%message, "Request failed");
            Err(ApiFault::ConnectionFault { message })
        }
    }
}

/// Classify a response that made it back over the wire
pub fn classify_response(response: RawResponse) -> std::result::Result<Value, ApiFault> {
    let status = response.status;
    tracing::debug!(status, "Response status");

    if response.is_success() {
        return Ok(decode_success_body(&response.body));
    }

    let message = error_message(&response);

    Err(match status {
        404 => ApiFault::NotFound { message },
        401 | 403 => ApiFault::AuthFailure { status, message },
        400 => ApiFault::Validation { message },
        s if s >= 500 => ApiFault::ServerFault { status, message },
        _ => ApiFault::Validation { message },
    })
}

/// Decode a success body, degrading to an empty mapping
fn decode_success_body(body: &str) -> Value {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode JSON response");
            Value::Object(Map::new())
        }
    }
}

/// Pull `message` out of a JSON error body, or describe the HTTP failure
fn error_message(response: &RawResponse) -> String {
    let from_body = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|v| match v.get("message") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        });

    from_body.unwrap_or_else(|| http_failure_description(response.status, &response.url))
}

fn http_failure_description(status: u16, url: &str) -> String {
    let kind = if status >= 500 {
        "Server error"
    } else {
        "Client error"
    };
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown");

    format!("{kind} '{status} {reason}' for url '{url}'")
}

/// Whether a payload is the "nothing usable" value
///
/// Undecodable success bodies become `{}`; an explicit `null` is treated
/// the same way.
pub fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Decode a classified payload into a typed schema
///
/// An empty payload yields `T::default()` so the empty-body policy holds
/// through the typed boundary.
///
/// # Errors
///
/// Returns `Error::Decode` when the JSON does not fit the schema
pub fn decode_payload<T>(resource: &'static str, payload: Value) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if is_empty_payload(&payload) {
        return Ok(T::default());
    }

    serde_json::from_value(payload).map_err(|source| Error::Decode { resource, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse::new("https://echo.pims.cfl.ca/api/teams", status, body)
    }

    #[test]
    fn test_success_returns_body_unchanged() {
        let body = r#"[{"ID": 1, "name": "Lions"}]"#;
        let payload = classify(Ok(response(200, body))).unwrap();
        assert_eq!(payload, json!([{"ID": 1, "name": "Lions"}]));
    }

    #[test]
    fn test_success_with_html_body_degrades_to_empty_mapping() {
        let payload = classify(Ok(response(200, "<html>maintenance</html>"))).unwrap();
        assert_eq!(payload, json!({}));
    }

    #[test]
    fn test_success_with_empty_body_degrades_to_empty_mapping() {
        let payload = classify(Ok(response(204, ""))).unwrap();
        assert_eq!(payload, json!({}));
    }

    #[test]
    fn test_not_found_uses_json_message() {
        let fault = classify(Ok(response(404, r#"{"message": "Team not found"}"#))).unwrap_err();
        assert_eq!(
            fault,
            ApiFault::NotFound {
                message: "Team not found".into()
            }
        );
    }

    #[test]
    fn test_not_found_falls_back_to_http_description() {
        let fault = classify(Ok(response(404, "nope"))).unwrap_err();
        match fault {
            ApiFault::NotFound { message } => {
                assert!(message.contains("404 Not Found"), "{message}");
                assert!(message.contains("/api/teams"), "{message}");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_json_body_without_message_falls_back() {
        let fault = classify(Ok(response(400, r#"{"error": "bad"}"#))).unwrap_err();
        match fault {
            ApiFault::Validation { message } => assert!(message.starts_with("Client error")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_auth_failures_keep_status() {
        for status in [401, 403] {
            let fault = classify(Ok(response(status, r#"{"message": "denied"}"#))).unwrap_err();
            assert_eq!(
                fault,
                ApiFault::AuthFailure {
                    status,
                    message: "denied".into()
                }
            );
        }
    }

    #[test]
    fn test_bad_request_is_validation() {
        let fault = classify(Ok(response(400, r#"{"message": "limit too big"}"#))).unwrap_err();
        assert_eq!(
            fault,
            ApiFault::Validation {
                message: "limit too big".into()
            }
        );
    }

    #[test]
    fn test_server_fault_keeps_status() {
        let fault = classify(Ok(response(503, ""))).unwrap_err();
        match fault {
            ApiFault::ServerFault { status, message } => {
                assert_eq!(status, 503);
                assert!(message.starts_with("Server error '503"), "{message}");
            }
            other => panic!("expected ServerFault, got {other:?}"),
        }
    }

    #[test]
    fn test_other_client_errors_are_validation() {
        for status in [402, 405, 409, 418, 422, 429] {
            let fault = classify(Ok(response(status, ""))).unwrap_err();
            assert!(
                matches!(fault, ApiFault::Validation { .. }),
                "{status} => {fault:?}"
            );
        }
    }

    #[test]
    fn test_transport_faults() {
        let fault = classify(Err(TransportError::Connect("refused".into()))).unwrap_err();
        assert_eq!(
            fault,
            ApiFault::ConnectionFault {
                message: "refused".into()
            }
        );

        let fault = classify(Err(TransportError::Timeout("10s elapsed".into()))).unwrap_err();
        assert_eq!(
            fault,
            ApiFault::TimeoutFault {
                message: "10s elapsed".into()
            }
        );

        let fault = classify(Err(TransportError::Request("body read".into()))).unwrap_err();
        assert!(matches!(fault, ApiFault::ConnectionFault { .. }));
    }

    #[test]
    fn test_non_string_message_is_stringified() {
        let fault = classify(Ok(response(400, r#"{"message": ["a", "b"]}"#))).unwrap_err();
        assert_eq!(
            fault,
            ApiFault::Validation {
                message: r#"["a","b"]"#.into()
            }
        );
    }

    #[test]
    fn test_decode_payload_empty_gives_default() {
        let teams: Vec<serde_json::Value> = decode_payload("teams", json!({})).unwrap();
        assert!(teams.is_empty());

        let teams: Vec<serde_json::Value> = decode_payload("teams", Value::Null).unwrap();
        assert!(teams.is_empty());
    }

    #[test]
    fn test_decode_payload_schema_mismatch() {
        let result: Result<Vec<u32>> = decode_payload("teams", json!({"ID": 1}));
        assert!(matches!(
            result,
            Err(Error::Decode {
                resource: "teams",
                ..
            })
        ));
    }

    proptest! {
        #[test]
        fn prop_success_range_never_faults(status in 200u16..400, body in ".*") {
            prop_assert!(classify(Ok(response(status, &body))).is_ok());
        }

        #[test]
        fn prop_success_range_returns_json_unchanged(status in 200u16..400, n in any::<i64>()) {
            let body = format!(r#"{{"value": {n}}}"#);
            let payload = classify(Ok(response(status, &body))).unwrap();
            prop_assert_eq!(payload, json!({"value": n}));
        }

        #[test]
        fn prop_server_errors_keep_status(status in 500u16..600) {
            let fault = classify(Ok(response(status, ""))).unwrap_err();
            let is_server_fault = matches!(fault, ApiFault::ServerFault { status: s, .. } if s == status);
            prop_assert!(is_server_fault);
        }

        #[test]
        fn prop_client_errors_classified(status in 400u16..500) {
            let fault = classify(Ok(response(status, ""))).unwrap_err();
            let ok = match status {
                404 => matches!(fault, ApiFault::NotFound { .. }),
                401 | 403 => matches!(fault, ApiFault::AuthFailure { status: s, .. } if s == status),
                _ => matches!(fault, ApiFault::Validation { .. }),
            };
            prop_assert!(ok, "{} => {:?}", status, fault);
        }
    }
}
