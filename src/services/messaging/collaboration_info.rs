use crate::config::OutboundConfig;
use crate::domain::messaging::{AgreementRef, CollaborationInfo, Service, TEST_ACTION, TEST_SERVICE};
use crate::domain::transmission::TransmissionRequest;
use crate::services::messaging::collaborators::MessageIdGenerator;
use crate::services::messaging::message_info::non_empty;

/// `profile` is the effective profile for this request. The agreement
/// reference is operator policy and is read from `default_profile` only.
pub(crate) fn create(
    request: &TransmissionRequest,
    profile: &OutboundConfig,
    default_profile: &OutboundConfig,
    ids: &dyn MessageIdGenerator,
) -> CollaborationInfo {
    let conversation_id = match non_empty(request.conversation_id.as_deref()) {
        Some(id) => id.to_string(),
        None => {
            let id = ids.generate();
            tracing::debug!(conversation_id = %id, "Generated conversation id");
            id
        }
    };

    let (action, service) = if request.ping {
        (TEST_ACTION.to_string(), Service { r#type: None, value: TEST_SERVICE.to_string() })
    } else {
        (
            request.header.document_type.to_string(),
            Service {
                r#type: Some(profile.service_type.clone()),
                value: request.header.process.identifier().to_string(),
            },
        )
    };

    CollaborationInfo {
        agreement_ref: default_profile.agreement_ref().map(|value| AgreementRef { value: value.to_string() }),
        service,
        action,
        conversation_id,
    }
}
