use crate::domain::certificate::Certificate;
use crate::error::{AppError, Result};
use crate::services::messaging::collaborators::CommonNameExtractor;
use x509_parser::prelude::*;

/// Reads the first `CN` attribute of the certificate subject.
#[derive(Debug, Clone, Copy, Default)]
pub struct X509CommonNameExtractor;

impl CommonNameExtractor for X509CommonNameExtractor {
    fn extract_common_name(&self, certificate: &Certificate) -> Result<String> {
        let (_, cert) = X509Certificate::from_der(certificate.as_der())
            .map_err(|e| AppError::CertificateFormat(format!("Failed to parse certificate: {e}")))?;

        let common_name = cert
            .subject()
            .iter_common_name()
            .next()
            .ok_or_else(|| AppError::CertificateFormat(format!("No common name in subject '{}'", cert.subject())))?;

        common_name
            .as_str()
            .map(str::to_string)
            .map_err(|e| AppError::CertificateFormat(format!("Common name is not a string: {e}")))
    }
}
