//! The ebMS 3.0 `Messaging` header as an immutable value tree.
//!
//! Field names serialize to the ebMS element names. Optional elements that are
//! absent are omitted entirely rather than rendered empty.

use serde::Serialize;
use std::fmt;
use time::OffsetDateTime;

pub const EBMS_NAMESPACE: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/";

/// Action of a connectivity test message.
pub const TEST_ACTION: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/test";
/// Service of a connectivity test message.
pub const TEST_SERVICE: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/service";

pub const CONTENT_REFERENCE_PREFIX: &str = "cid:";
pub const CONTENT_ID_HEADER: &str = "Content-ID";
pub const CHARACTER_SET_PROPERTY: &str = "CharacterSet";
pub const ORIGINAL_SENDER_PROPERTY: &str = "originalSender";
pub const FINAL_RECIPIENT_PROPERTY: &str = "finalRecipient";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QualifiedName {
    pub namespace: &'static str,
    pub local_part: &'static str,
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace, self.local_part)
    }
}

pub const MESSAGING_QNAME: QualifiedName = QualifiedName { namespace: EBMS_NAMESPACE, local_part: "Messaging" };

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Messaging {
    pub user_message: UserMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserMessage {
    pub message_info: MessageInfo,
    pub party_info: PartyInfo,
    pub collaboration_info: CollaborationInfo,
    pub message_properties: MessageProperties,
    pub payload_info: PayloadInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageInfo {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_to_message_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartyInfo {
    pub from: Party,
    pub to: Party,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Party {
    pub party_id: PartyId,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyId {
    #[serde(rename = "type")]
    pub r#type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollaborationInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_ref: Option<AgreementRef>,
    pub service: Service,
    pub action: String,
    pub conversation_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgreementRef {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageProperties {
    pub property: Vec<Property>,
}

impl MessageProperties {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.property.iter().find(|p| p.name == name).map(|p| p.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayloadInfo {
    pub part_info: Vec<PartInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartInfo {
    #[serde(rename = "href")]
    pub href: String,
    pub part_properties: PartProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartProperties {
    pub property: Vec<Property>,
}

/// The serialized header handed to the SOAP layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoapHeader {
    pub name: QualifiedName,
    pub content: serde_json::Value,
    pub must_understand: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messaging_qname_display() {
        assert_eq!(
            MESSAGING_QNAME.to_string(),
            "{http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/}Messaging"
        );
    }

    #[test]
    fn test_absent_optionals_are_not_serialized() {
        let info = MessageInfo {
            timestamp: OffsetDateTime::UNIX_EPOCH,
            message_id: "id-1".into(),
            ref_to_message_id: None,
        };
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["MessageId"], "id-1");
        assert_eq!(json["Timestamp"], "1970-01-01T00:00:00Z");
        assert!(json.get("RefToMessageId").is_none());

        let service = Service { r#type: None, value: TEST_SERVICE.into() };
        let json = serde_json::to_value(&service).unwrap();
        assert!(json.get("type").is_none());
    }
}
