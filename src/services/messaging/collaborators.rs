use crate::domain::certificate::Certificate;
use crate::domain::messaging::{Messaging, QualifiedName, SoapHeader};
use crate::error::Result;

pub trait MessageIdGenerator: Send + Sync + std::fmt::Debug {
    /// Returns an identifier that is unique across the process lifetime,
    /// including under concurrent calls.
    fn generate(&self) -> String;
}

pub trait CommonNameExtractor: Send + Sync + std::fmt::Debug {
    /// Returns the subject common name of `certificate`.
    ///
    /// # Errors
    /// Returns `AppError::CertificateFormat` if the certificate has no usable subject name.
    fn extract_common_name(&self, certificate: &Certificate) -> Result<String>;
}

pub trait ContentIdCleaner: Send + Sync + std::fmt::Debug {
    /// Normalizes a transport-assigned attachment id into a bare content-id token.
    fn clean(&self, raw_id: &str) -> String;
}

pub trait HeaderSerializer: Send + Sync + std::fmt::Debug {
    /// Binds the header under `name`.
    ///
    /// # Errors
    /// Returns the binding failure; the caller wraps it as `AppError::HeaderConstruction`.
    fn serialize(&self, name: &QualifiedName, messaging: &Messaging) -> anyhow::Result<SoapHeader>;
}
