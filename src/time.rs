// src/time.rs

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimeResponse {
    pub current_time: String,
}

/// GET /api/time. Captures the wall clock at invocation and returns it as an
/// ISO-8601 string with millisecond precision and a `Z` suffix.
pub async fn get_time() -> Json<TimeResponse> {
    let current_time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    info!("Handling /api/time request: {}", current_time);
    Json(TimeResponse { current_time })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_current_time_is_valid_iso8601() {
        let Json(body) = get_time().await;
        let parsed = DateTime::parse_from_rfc3339(&body.current_time);
        assert!(parsed.is_ok(), "not ISO-8601: {}", body.current_time);
    }

    #[tokio::test]
    async fn test_current_time_has_millis_and_z_suffix() {
        let Json(body) = get_time().await;
        // e.g. 2024-01-01T00:00:00.000Z
        assert!(body.current_time.ends_with('Z'));
        let fraction = body.current_time
            .rsplit('.')
            .next()
            .unwrap()
            .trim_end_matches('Z');
        assert_eq!(fraction.len(), 3, "expected millisecond precision: {}", body.current_time);
    }

    #[tokio::test]
    async fn test_sequential_calls_never_decrease() {
        let Json(first) = get_time().await;
        let Json(second) = get_time().await;
        let t1 = DateTime::parse_from_rfc3339(&first.current_time).unwrap();
        let t2 = DateTime::parse_from_rfc3339(&second.current_time).unwrap();
        assert!(t2 >= t1);
    }

    #[test]
    fn test_response_serializes_with_camel_case_key() {
        let body = TimeResponse {
            current_time: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["currentTime"], "2024-01-01T00:00:00.000Z");
    }
}
