use crate::error::{AppError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// An X.509 certificate in DER encoding.
///
/// The bytes are not validated on construction; parsing happens when a name is
/// extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate(Vec<u8>);

impl Certificate {
    #[must_use]
    pub const fn from_der(der: Vec<u8>) -> Self {
        Self(der)
    }

    /// Decodes the first `CERTIFICATE` block of a PEM document.
    ///
    /// # Errors
    /// Returns `AppError::CertificateFormat` if no block is present or its body is not valid base64.
    pub fn from_pem(pem: &[u8]) -> Result<Self> {
        let pem = std::str::from_utf8(pem)
            .map_err(|e| AppError::CertificateFormat(format!("Invalid PEM encoding: {e}")))?;

        let start = pem
            .find(PEM_BEGIN)
            .ok_or_else(|| AppError::CertificateFormat("No certificate found in PEM".into()))?;
        let body = &pem[start + PEM_BEGIN.len()..];
        let end = body
            .find(PEM_END)
            .ok_or_else(|| AppError::CertificateFormat("Unterminated certificate block".into()))?;

        let base64_clean: String = body[..end].chars().filter(|c| !c.is_whitespace()).collect();
        STANDARD
            .decode(base64_clean)
            .map(Self)
            .map_err(|e| AppError::CertificateFormat(format!("Failed to decode certificate: {e}")))
    }

    /// Accepts either PEM or raw DER.
    ///
    /// # Errors
    /// Returns `AppError::CertificateFormat` if PEM input cannot be decoded.
    pub fn from_pem_or_der(bytes: Vec<u8>) -> Result<Self> {
        if bytes.starts_with(b"-----BEGIN") { Self::from_pem(&bytes) } else { Ok(Self(bytes)) }
    }

    #[must_use]
    pub fn as_der(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pem_decodes_body() {
        let pem = format!("{PEM_BEGIN}\nAQID\nBA==\n{PEM_END}\n");
        let cert = Certificate::from_pem(pem.as_bytes()).unwrap();
        assert_eq!(cert.as_der(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_pem_without_block_fails() {
        let result = Certificate::from_pem(b"not a certificate");
        assert!(matches!(result, Err(AppError::CertificateFormat(_))));
    }

    #[test]
    fn test_from_pem_or_der_passes_der_through() {
        let cert = Certificate::from_pem_or_der(vec![0x30, 0x82]).unwrap();
        assert_eq!(cert.as_der(), &[0x30, 0x82]);
    }
}
