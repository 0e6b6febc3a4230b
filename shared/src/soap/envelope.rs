//! Envelope encoding and decoding

use std::collections::BTreeMap;
use std::fmt::Write as _;

use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use thiserror::Error;

use super::{ENVELOPE_NS, NAMESPACE};

/// Envelope codec errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SoapError {
    #[error("Malformed XML: {0}")]
    Malformed(String),

    #[error("Not a SOAP envelope")]
    NotAnEnvelope,

    #[error("SOAP body is empty")]
    EmptyBody,
}

/// A SOAP fault as carried in the Body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapFault {
    /// e.g. `soap:Client`
    pub code: String,
    pub message: String,
}

/// One message element with flat text children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoapMessage {
    /// Local name of the Body child
    pub element: String,
    /// Child elements by local name; insertion order is not significant
    pub fields: BTreeMap<String, String>,
}

/// What a decoded envelope carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoapPayload {
    Message(SoapMessage),
    Fault(SoapFault),
}

impl SoapMessage {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set a field only when a value is present
    pub fn with_optional_field(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.with_field(name, v),
            None => self,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Render as a complete SOAP 1.1 envelope
    pub fn to_envelope(&self) -> String {
        let mut body = String::new();
        let _ = write!(body, "<tns:{}>", self.element);
        for (name, value) in &self.fields {
            let _ = write!(body, "<tns:{name}>{}</tns:{name}>", escape(value.as_str()));
        }
        let _ = write!(body, "</tns:{}>", self.element);
        wrap(&body)
    }

    /// Decode an envelope carrying a message or a fault
    pub fn parse(xml: &str) -> Result<SoapPayload, SoapError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        // local names from the root down to the current element
        let mut path: Vec<String> = Vec::new();
        let mut message: Option<SoapMessage> = None;
        let mut field: Option<(String, String)> = None;
        let mut body_closed = false;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| SoapError::Malformed(e.to_string()))?;
            match event {
                Event::Start(start) => {
                    let name = local_name(start.local_name().as_ref())?;
                    open_element(&mut path, &mut message, &mut field, &name, body_closed)?;
                    path.push(name);
                }
                Event::Empty(empty) => {
                    let name = local_name(empty.local_name().as_ref())?;
                    open_element(&mut path, &mut message, &mut field, &name, body_closed)?;
                    if path.len() == 3
                        && let (Some(msg), Some((name, value))) = (message.as_mut(), field.take())
                    {
                        msg.fields.insert(name, value);
                    }
                }
                Event::Text(text) => {
                    if let Some((_, value)) = field.as_mut()
                        && path.len() == 4
                    {
                        let text = text
                            .unescape()
                            .map_err(|e| SoapError::Malformed(e.to_string()))?;
                        value.push_str(&text);
                    }
                }
                Event::CData(data) => {
                    if let Some((_, value)) = field.as_mut()
                        && path.len() == 4
                    {
                        let raw = data.into_inner();
                        value.push_str(&String::from_utf8_lossy(&raw));
                    }
                }
                Event::End(_) => {
                    if path.len() == 4
                        && let (Some(msg), Some((name, value))) = (message.as_mut(), field.take())
                    {
                        msg.fields.insert(name, value);
                    }
                    if path.len() == 2 && path[1] == "Body" {
                        body_closed = true;
                    }
                    path.pop();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !path.is_empty() {
            return Err(SoapError::Malformed("unexpected end of document".to_string()));
        }
        let message = message.ok_or(SoapError::EmptyBody)?;

        if message.element == "Fault" {
            return Ok(SoapPayload::Fault(SoapFault {
                code: message.field("faultcode").unwrap_or_default().to_string(),
                message: message.field("faultstring").unwrap_or_default().to_string(),
            }));
        }
        Ok(SoapPayload::Message(message))
    }
}

impl SoapFault {
    /// Fault caused by the caller (bad envelope, unknown operation)
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            code: "soap:Client".to_string(),
            message: message.into(),
        }
    }

    pub fn to_envelope(&self) -> String {
        let body = format!(
            "<soap:Fault><faultcode>{}</faultcode><faultstring>{}</faultstring></soap:Fault>",
            escape(self.code.as_str()),
            escape(self.message.as_str())
        );
        wrap(&body)
    }
}

fn wrap(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><soap:Envelope xmlns:soap="{ENVELOPE_NS}" xmlns:tns="{NAMESPACE}"><soap:Body>{body}</soap:Body></soap:Envelope>"#
    )
}

fn local_name(raw: &[u8]) -> Result<String, SoapError> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| SoapError::Malformed(e.to_string()))
}

/// Track an opening tag at depth `path.len()`
///
/// Depth 0 must be the Envelope, the Body sits at depth 1 (a Header may
/// precede it), the first Body child at depth 2 is the message and its
/// children at depth 3 are fields. Anything deeper is ignored.
fn open_element(
    path: &mut [String],
    message: &mut Option<SoapMessage>,
    field: &mut Option<(String, String)>,
    name: &str,
    body_closed: bool,
) -> Result<(), SoapError> {
    match path.len() {
        0 if name != "Envelope" => Err(SoapError::NotAnEnvelope),
        2 if path[1] == "Body" && message.is_none() && !body_closed => {
            *message = Some(SoapMessage::new(name));
            Ok(())
        }
        3 if path[1] == "Body" && message.as_ref().is_some_and(|m| m.element == path[2]) => {
            *field = Some((name.to_string(), String::new()));
            Ok(())
        }
        _ => Ok(()),
    }
}
