//! SOAP 1.1 document/literal support
//!
//! The document-style interface exchanges envelopes whose Body holds one
//! message element with flat, text-only children. [`SoapMessage`] is that
//! shape; [`Operation`] names the messages the reservation service knows.

mod envelope;
mod wsdl;

pub use envelope::{SoapError, SoapFault, SoapMessage, SoapPayload};
pub use wsdl::wsdl_document;

/// Target namespace of the reservation service
pub const NAMESPACE: &str = "urn:mesa:reservations";

/// SOAP 1.1 envelope namespace
pub const ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Content type for SOAP 1.1 over HTTP
pub const CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Operations exposed by the document-style interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateReservation,
    GetReservation,
    CancelReservation,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::CreateReservation,
        Operation::GetReservation,
        Operation::CancelReservation,
    ];

    /// Operation name, also used as the SOAPAction value
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateReservation => "CreateReservation",
            Self::GetReservation => "GetReservation",
            Self::CancelReservation => "CancelReservation",
        }
    }

    /// Body element of the request message
    pub const fn request_element(&self) -> &'static str {
        match self {
            Self::CreateReservation => "CreateReservationRequest",
            Self::GetReservation => "GetReservationRequest",
            Self::CancelReservation => "CancelReservationRequest",
        }
    }

    /// Body element of the response message
    pub const fn response_element(&self) -> &'static str {
        match self {
            Self::CreateReservation => "CreateReservationResponse",
            Self::GetReservation => "GetReservationResponse",
            Self::CancelReservation => "CancelReservationResponse",
        }
    }

    /// Resolve the operation from a request body element name
    pub fn from_request_element(element: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.request_element() == element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_lookup() {
        assert_eq!(
            Operation::from_request_element("CreateReservationRequest"),
            Some(Operation::CreateReservation)
        );
        assert_eq!(Operation::from_request_element("CrearReserva"), None);
    }
}
