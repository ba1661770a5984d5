use crate::services::messaging::collaborators::MessageIdGenerator;
use uuid::Uuid;

/// Random v4 UUIDs, optionally as `<uuid>@<domain>`.
#[derive(Debug, Clone, Default)]
pub struct UuidMessageIdGenerator {
    domain: Option<String>,
}

impl UuidMessageIdGenerator {
    #[must_use]
    pub fn new(domain: Option<String>) -> Self {
        Self { domain: domain.filter(|d| !d.is_empty()) }
    }
}

impl MessageIdGenerator for UuidMessageIdGenerator {
    fn generate(&self) -> String {
        let id = Uuid::new_v4();
        match &self.domain {
            Some(domain) => format!("{id}@{domain}"),
            None => id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_distinct() {
        let ids = UuidMessageIdGenerator::default();
        let generated: HashSet<String> = (0..1000).map(|_| ids.generate()).collect();
        assert_eq!(generated.len(), 1000);
    }

    #[test]
    fn test_domain_suffix() {
        let id = UuidMessageIdGenerator::new(Some("ap.example.com".into())).generate();
        let (uuid, domain) = id.split_once('@').unwrap();

        assert!(Uuid::parse_str(uuid).is_ok());
        assert_eq!(domain, "ap.example.com");
    }

    #[test]
    fn test_empty_domain_is_ignored() {
        let id = UuidMessageIdGenerator::new(Some(String::new())).generate();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
