use crate::config::OutboundConfig;
use crate::domain::certificate::Certificate;
use crate::domain::messaging::{Party, PartyId, PartyInfo};
use crate::domain::transmission::TransmissionRequest;
use crate::error::Result;
use crate::services::messaging::collaborators::CommonNameExtractor;

/// Derives both parties from certificate common names.
///
/// Extraction errors are returned as-is.
pub(crate) fn create(
    own_certificate: &Certificate,
    request: &TransmissionRequest,
    profile: &OutboundConfig,
    names: &dyn CommonNameExtractor,
) -> Result<PartyInfo> {
    let from_name = names.extract_common_name(own_certificate)?;
    let to_name = names.extract_common_name(&request.endpoint.certificate)?;
    tracing::debug!(from = %from_name, to = %to_name, "Resolved party names");

    Ok(PartyInfo {
        from: party(&profile.party_id_type, from_name, &profile.from_role),
        to: party(&profile.party_id_type, to_name, &profile.to_role),
    })
}

fn party(party_id_type: &str, name: String, role: &str) -> Party {
    Party { party_id: PartyId { r#type: party_id_type.to_string(), value: name }, role: role.to_string() }
}
