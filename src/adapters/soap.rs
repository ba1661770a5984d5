use crate::domain::messaging::{Messaging, QualifiedName, SoapHeader};
use crate::services::messaging::collaborators::HeaderSerializer;
use anyhow::Context;

/// Binds the header into a JSON tree using the ebMS element names.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonHeaderSerializer;

impl HeaderSerializer for JsonHeaderSerializer {
    fn serialize(&self, name: &QualifiedName, messaging: &Messaging) -> anyhow::Result<SoapHeader> {
        let content = serde_json::to_value(messaging).with_context(|| format!("Failed to bind {name}"))?;
        Ok(SoapHeader { name: name.clone(), content, must_understand: true })
    }
}
