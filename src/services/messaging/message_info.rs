use crate::domain::messaging::MessageInfo;
use crate::domain::transmission::TransmissionRequest;
use crate::services::messaging::collaborators::MessageIdGenerator;
use time::OffsetDateTime;

pub(crate) fn create(request: &TransmissionRequest, ids: &dyn MessageIdGenerator) -> MessageInfo {
    create_at(request, ids, now())
}

pub(crate) fn create_at(
    request: &TransmissionRequest,
    ids: &dyn MessageIdGenerator,
    timestamp: OffsetDateTime,
) -> MessageInfo {
    let message_id = match non_empty(request.message_id.as_deref()) {
        Some(id) => id.to_string(),
        None => {
            let id = ids.generate();
            tracing::debug!(message_id = %id, "Generated message id");
            id
        }
    };

    MessageInfo {
        timestamp,
        message_id,
        ref_to_message_id: non_empty(request.ref_to_message_id.as_deref()).map(str::to_string),
    }
}

/// Wall-clock time in the local offset, UTC if the local offset is unknown.
fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::messaging::test_support::{CountingIdGenerator, request};

    #[test]
    fn test_explicit_message_id_is_kept() {
        let ids = CountingIdGenerator::default();
        let info = create(&request().with_message_id("explicit-1"), &ids);

        assert_eq!(info.message_id, "explicit-1");
        assert_eq!(ids.calls(), 0);
    }

    #[test]
    fn test_empty_message_id_is_generated() {
        let ids = CountingIdGenerator::default();
        let info = create(&request().with_message_id(""), &ids);

        assert_eq!(info.message_id, "id-1");
    }

    #[test]
    fn test_ref_to_message_id_present_only_when_supplied() {
        let ids = CountingIdGenerator::default();

        let info = create(&request().with_ref_to_message_id("msg-42"), &ids);
        assert_eq!(info.ref_to_message_id.as_deref(), Some("msg-42"));

        let info = create(&request(), &ids);
        assert_eq!(info.ref_to_message_id, None);
    }

    #[test]
    fn test_timestamp_is_captured_at_derivation() {
        let ids = CountingIdGenerator::default();
        let before = OffsetDateTime::now_utc();
        let info = create(&request(), &ids);
        let after = OffsetDateTime::now_utc();

        assert!(info.timestamp >= before && info.timestamp <= after);
    }

    #[test]
    fn test_create_at_uses_given_timestamp() {
        let ids = CountingIdGenerator::default();
        let info = create_at(&request(), &ids, OffsetDateTime::UNIX_EPOCH);
        assert_eq!(info.timestamp, OffsetDateTime::UNIX_EPOCH);
    }
}
