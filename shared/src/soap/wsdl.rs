//! WSDL description of the reservation service

use quick_xml::escape::escape;

use super::{NAMESPACE, Operation};

/// Request/response child elements of each operation, with XSD types
fn parts(op: Operation) -> (&'static [(&'static str, &'static str)], &'static [(&'static str, &'static str)]) {
    match op {
        Operation::CreateReservation => (
            &[
                ("customerId", "xsd:string"),
                ("branchId", "xsd:string"),
                ("date", "xsd:string"),
                ("time", "xsd:string"),
                ("partySize", "xsd:int"),
            ],
            &[("reservationId", "xsd:string"), ("status", "xsd:string")],
        ),
        Operation::GetReservation => (
            &[("reservationId", "xsd:string")],
            &[
                ("reservationId", "xsd:string"),
                ("status", "xsd:string"),
                ("customerId", "xsd:string"),
                ("branchId", "xsd:string"),
                ("date", "xsd:string"),
                ("time", "xsd:string"),
                ("partySize", "xsd:int"),
                ("tableId", "xsd:string"),
            ],
        ),
        Operation::CancelReservation => (
            &[("reservationId", "xsd:string")],
            &[("reservationId", "xsd:string"), ("status", "xsd:string")],
        ),
    }
}

fn element(name: &str, children: &[(&str, &str)]) -> String {
    let sequence: String = children
        .iter()
        .map(|(child, ty)| {
            format!(r#"<xsd:element name="{child}" type="{ty}" minOccurs="0"/>"#)
        })
        .collect();
    format!(
        r#"<xsd:element name="{name}"><xsd:complexType><xsd:sequence>{sequence}</xsd:sequence></xsd:complexType></xsd:element>"#
    )
}

/// Build the WSDL document advertising `endpoint` as the service address
pub fn wsdl_document(endpoint: &str) -> String {
    let endpoint = escape(endpoint);
    let mut types = String::new();
    let mut messages = String::new();
    let mut port_ops = String::new();
    let mut binding_ops = String::new();

    for op in Operation::ALL {
        let (input, output) = parts(op);
        let name = op.name();
        let request = op.request_element();
        let response = op.response_element();

        types.push_str(&element(request, input));
        types.push_str(&element(response, output));
        messages.push_str(&format!(
            r#"<message name="{name}Input"><part name="parameters" element="tns:{request}"/></message><message name="{name}Output"><part name="parameters" element="tns:{response}"/></message>"#
        ));
        port_ops.push_str(&format!(
            r#"<operation name="{name}"><input message="tns:{name}Input"/><output message="tns:{name}Output"/></operation>"#
        ));
        binding_ops.push_str(&format!(
            r#"<operation name="{name}"><soap:operation soapAction="{name}"/><input><soap:body use="literal"/></input><output><soap:body use="literal"/></output></operation>"#
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions name="ReservationService" targetNamespace="{NAMESPACE}" xmlns="http://schemas.xmlsoap.org/wsdl/" xmlns:tns="{NAMESPACE}" xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
<types><xsd:schema targetNamespace="{NAMESPACE}" elementFormDefault="qualified">{types}</xsd:schema></types>
{messages}
<portType name="ReservationPortType">{port_ops}</portType>
<binding name="ReservationBinding" type="tns:ReservationPortType"><soap:binding style="document" transport="http://schemas.xmlsoap.org/soap/http"/>{binding_ops}</binding>
<service name="ReservationService"><port name="ReservationPort" binding="tns:ReservationBinding"><soap:address location="{endpoint}"/></port></service>
</definitions>"#
    )
}
