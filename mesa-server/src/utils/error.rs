//! Error handling for the HTTP layer
//!
//! The error types themselves live in `shared::error` so the client crate
//! decodes exactly what the server encodes. This module maps axum's
//! extractor rejections onto them: a body or query string that does not
//! deserialize is a `ValidationFailed` error like any other bad field.

use axum::extract::rejection::{JsonRejection, QueryRejection};

pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode};

/// Map a JSON body rejection to a validation error
pub fn json_rejection(rejection: JsonRejection) -> AppError {
    let reason = match &rejection {
        JsonRejection::MissingJsonContentType(_) => "expected Content-Type: application/json",
        JsonRejection::JsonSyntaxError(_) => "request body is not valid JSON",
        JsonRejection::JsonDataError(_) => "request body has a field of the wrong type",
        _ => "request body could not be read",
    };
    AppError::validation(reason).with_detail("reason", rejection.body_text())
}

/// Map a query-string rejection to a validation error
pub fn query_rejection(rejection: QueryRejection) -> AppError {
    AppError::validation("query string could not be parsed")
        .with_detail("reason", rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::extract::{FromRequest, Query};
    use shared::{AvailabilityParams, CreateReservationRequest};

    #[tokio::test]
    async fn test_bad_json_is_validation_error() {
        let request = http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let rejection = Json::<CreateReservationRequest>::from_request(request, &())
            .await
            .unwrap_err();

        let err = json_rejection(rejection);
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "request body is not valid JSON");
    }

    #[tokio::test]
    async fn test_wrong_type_is_validation_error() {
        let request = http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(r#"{"partySize":"two"}"#))
            .unwrap();
        let rejection = Json::<CreateReservationRequest>::from_request(request, &())
            .await
            .unwrap_err();
        assert_eq!(json_rejection(rejection).code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_bad_query_is_validation_error() {
        let uri: http::Uri = "/api/availability?branchId=S01&partySize=lots".parse().unwrap();
        let rejection = Query::<AvailabilityParams>::try_from_uri(&uri).unwrap_err();
        let err = query_rejection(rejection);
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.details.unwrap().contains_key("reason"));
    }
}
