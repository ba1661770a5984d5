use crate::domain::messaging::{FINAL_RECIPIENT_PROPERTY, MessageProperties, ORIGINAL_SENDER_PROPERTY, Property};
use crate::domain::transmission::TransmissionRequest;

/// Caller properties plus `originalSender` and `finalRecipient`, which default
/// to the request's sender and receiver when the caller did not set them.
pub(crate) fn create(request: &TransmissionRequest) -> MessageProperties {
    let mut properties = request.message_properties.clone().unwrap_or_default();

    properties
        .entry(ORIGINAL_SENDER_PROPERTY.to_string())
        .or_insert_with(|| request.header.sender.to_string());
    properties
        .entry(FINAL_RECIPIENT_PROPERTY.to_string())
        .or_insert_with(|| request.header.receiver.to_string());

    MessageProperties { property: properties.into_iter().map(|(name, value)| Property { name, value }).collect() }
}
