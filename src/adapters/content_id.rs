use crate::services::messaging::collaborators::ContentIdCleaner;

const CID_SCHEME: &str = "cid:";

/// Strips `<...>` and `cid:` wrapping from MIME content ids and percent-decodes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CidCleaner;

impl ContentIdCleaner for CidCleaner {
    fn clean(&self, raw_id: &str) -> String {
        let mut id = raw_id.trim();

        if let Some(inner) = id.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
            id = inner;
        }
        if let Some(bare) = id.strip_prefix(CID_SCHEME) {
            id = bare;
        }

        // Undecodable ids are used verbatim.
        urlencoding::decode(id).map_or_else(|_| id.to_string(), std::borrow::Cow::into_owned)
    }
}
