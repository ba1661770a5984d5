use crate::domain::certificate::Certificate;
use crate::domain::charset::Charset;
use crate::domain::identifier::{DocumentTypeIdentifier, ParticipantIdentifier, ProcessIdentifier};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmissionHeader {
    pub sender: ParticipantIdentifier,
    pub receiver: ParticipantIdentifier,
    pub document_type: DocumentTypeIdentifier,
    pub process: ProcessIdentifier,
}

/// The receiving access point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub certificate: Certificate,
    pub address: Option<String>,
}

impl Endpoint {
    #[must_use]
    pub const fn new(certificate: Certificate) -> Self {
        Self { certificate, address: None }
    }
}

/// One outbound transmission.
///
/// The AS4 fields are all optional; absent identifiers are generated when the
/// header is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmissionRequest {
    pub header: TransmissionHeader,
    pub endpoint: Endpoint,
    pub message_id: Option<String>,
    pub ref_to_message_id: Option<String>,
    pub conversation_id: Option<String>,
    pub payload_charset: Option<Charset>,
    pub message_properties: Option<BTreeMap<String, String>>,
    pub ping: bool,
}

impl TransmissionRequest {
    #[must_use]
    pub const fn new(header: TransmissionHeader, endpoint: Endpoint) -> Self {
        Self {
            header,
            endpoint,
            message_id: None,
            ref_to_message_id: None,
            conversation_id: None,
            payload_charset: None,
            message_properties: None,
            ping: false,
        }
    }

    #[must_use]
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    #[must_use]
    pub fn with_ref_to_message_id(mut self, ref_to_message_id: impl Into<String>) -> Self {
        self.ref_to_message_id = Some(ref_to_message_id.into());
        self
    }

    #[must_use]
    pub fn with_conversation_id(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }

    #[must_use]
    pub const fn with_payload_charset(mut self, charset: Charset) -> Self {
        self.payload_charset = Some(charset);
        self
    }

    #[must_use]
    pub fn with_message_properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.message_properties = Some(properties);
        self
    }

    #[must_use]
    pub const fn with_ping(mut self, ping: bool) -> Self {
        self.ping = ping;
        self
    }
}
