//! Wire mapping for error codes
//!
//! One table drives how each code surfaces on both front-ends: the HTTP
//! status used by the REST interface and the status string returned in a
//! SOAP response body.

use super::codes::ErrorCode;
use http::StatusCode;

/// SOAP status string for a successful creation
pub const SOAP_STATUS_CREATED: &str = "Created";

struct WireMapping {
    code: ErrorCode,
    http: StatusCode,
    soap: &'static str,
}

const WIRE_TABLE: &[WireMapping] = &[
    WireMapping {
        code: ErrorCode::Success,
        http: StatusCode::OK,
        soap: "Ok",
    },
    WireMapping {
        code: ErrorCode::ValidationFailed,
        http: StatusCode::BAD_REQUEST,
        soap: "ValidationError",
    },
    WireMapping {
        code: ErrorCode::NotFound,
        http: StatusCode::NOT_FOUND,
        soap: "NotFound",
    },
    WireMapping {
        code: ErrorCode::InvalidBranch,
        http: StatusCode::BAD_REQUEST,
        soap: "InvalidBranch",
    },
    WireMapping {
        code: ErrorCode::NoCapacity,
        http: StatusCode::CONFLICT,
        soap: "NoCapacity",
    },
    WireMapping {
        code: ErrorCode::SlotConflict,
        http: StatusCode::CONFLICT,
        soap: "SlotConflict",
    },
    WireMapping {
        code: ErrorCode::ReservationNotFound,
        http: StatusCode::NOT_FOUND,
        soap: "NotFound",
    },
    WireMapping {
        code: ErrorCode::InternalError,
        http: StatusCode::INTERNAL_SERVER_ERROR,
        soap: "InternalError",
    },
    WireMapping {
        code: ErrorCode::IntegrationUnavailable,
        http: StatusCode::BAD_GATEWAY,
        soap: "IntegrationUnavailable",
    },
];

fn lookup(code: ErrorCode) -> Option<&'static WireMapping> {
    WIRE_TABLE.iter().find(|m| m.code == code)
}

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        lookup(*self)
            .map(|m| m.http)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Status string carried by a SOAP response for this error code
    pub fn soap_status(&self) -> &'static str {
        lookup(*self).map(|m| m.soap).unwrap_or("InternalError")
    }

    /// Reverse lookup of a SOAP status string
    ///
    /// Only codes a front-end actually reports are candidates, searched in
    /// `PREFERRED` order, so `NotFound` resolves to `ReservationNotFound`
    /// rather than the generic `NotFound` code.
    pub fn from_soap_status(status: &str) -> Option<Self> {
        const PREFERRED: &[ErrorCode] = &[
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidBranch,
            ErrorCode::NoCapacity,
            ErrorCode::SlotConflict,
            ErrorCode::ReservationNotFound,
            ErrorCode::IntegrationUnavailable,
            ErrorCode::InternalError,
        ];
        PREFERRED
            .iter()
            .copied()
            .find(|code| code.soap_status() == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidBranch.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NoCapacity.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::SlotConflict.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::ReservationNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::IntegrationUnavailable.http_status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_soap_status() {
        assert_eq!(ErrorCode::ValidationFailed.soap_status(), "ValidationError");
        assert_eq!(ErrorCode::NoCapacity.soap_status(), "NoCapacity");
        assert_eq!(ErrorCode::SlotConflict.soap_status(), "SlotConflict");
        assert_eq!(ErrorCode::ReservationNotFound.soap_status(), "NotFound");
    }

    #[test]
    fn test_from_soap_status_prefers_reservation_codes() {
        assert_eq!(
            ErrorCode::from_soap_status("NotFound"),
            Some(ErrorCode::ReservationNotFound)
        );
        assert_eq!(
            ErrorCode::from_soap_status("ValidationError"),
            Some(ErrorCode::ValidationFailed)
        );
        assert_eq!(
            ErrorCode::from_soap_status("SlotConflict"),
            Some(ErrorCode::SlotConflict)
        );
        assert_eq!(ErrorCode::from_soap_status("Created"), None);
        assert_eq!(ErrorCode::from_soap_status("garbage"), None);
    }

    #[test]
    fn test_every_code_has_a_row() {
        for row in WIRE_TABLE {
            assert_eq!(lookup(row.code).map(|m| m.code), Some(row.code));
        }
        assert_eq!(WIRE_TABLE.len(), 9);
    }
}
