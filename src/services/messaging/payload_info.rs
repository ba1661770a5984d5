use crate::domain::attachment::Attachment;
use crate::domain::messaging::{
    CHARACTER_SET_PROPERTY, CONTENT_ID_HEADER, CONTENT_REFERENCE_PREFIX, PartInfo, PartProperties, PayloadInfo,
    Property,
};
use crate::domain::transmission::TransmissionRequest;
use crate::services::messaging::collaborators::ContentIdCleaner;

pub(crate) fn create(
    request: &TransmissionRequest,
    attachments: &[Attachment],
    cleaner: &dyn ContentIdCleaner,
) -> PayloadInfo {
    PayloadInfo { part_info: attachments.iter().map(|attachment| part_info(request, attachment, cleaner)).collect() }
}

fn part_info(request: &TransmissionRequest, attachment: &Attachment, cleaner: &dyn ContentIdCleaner) -> PartInfo {
    let href = format!("{CONTENT_REFERENCE_PREFIX}{}", cleaner.clean(&attachment.id));

    // Content-ID is carried by href; match is exact, as on the wire.
    let mut property: Vec<Property> = attachment
        .headers
        .iter()
        .filter(|(name, _)| name != CONTENT_ID_HEADER)
        .map(|(name, value)| Property::new(name, value))
        .collect();

    if let Some(charset) = request.payload_charset {
        property.push(Property::new(CHARACTER_SET_PROPERTY, charset.name().to_lowercase()));
    }

    PartInfo { href, part_properties: PartProperties { property } }
}
