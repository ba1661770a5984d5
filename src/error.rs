use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The certificate carries no usable subject common name.
    #[error("Certificate format error: {0}")]
    CertificateFormat(String),
    /// The assembled header was rejected by the serializer.
    #[error("Unable to marshal AS4 header")]
    HeaderConstruction(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
