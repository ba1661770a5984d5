pub mod collaborators;

mod collaboration_info;
mod message_info;
mod message_properties;
mod party_info;
mod payload_info;

use crate::config::OutboundConfig;
use crate::domain::attachment::Attachment;
use crate::domain::certificate::Certificate;
use crate::domain::messaging::{MESSAGING_QNAME, Messaging, SoapHeader, UserMessage};
use crate::domain::transmission::TransmissionRequest;
use crate::error::{AppError, Result};
use collaborators::{CommonNameExtractor, ContentIdCleaner, HeaderSerializer, MessageIdGenerator};
use opentelemetry::{KeyValue, global, metrics::Counter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub(crate) struct Metrics {
    pub(crate) headers_built_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("as4-outbound");
        Self {
            headers_built_total: meter
                .u64_counter("as4_headers_built_total")
                .with_description("Total AS4 Messaging headers built")
                .build(),
        }
    }
}

/// Builds the ebMS `Messaging` header for outbound transmissions.
///
/// Holds no per-request state; one instance can serve concurrent builds.
#[derive(Clone, Debug)]
pub struct MessagingProvider {
    certificate: Certificate,
    ids: Arc<dyn MessageIdGenerator>,
    names: Arc<dyn CommonNameExtractor>,
    cleaner: Arc<dyn ContentIdCleaner>,
    serializer: Arc<dyn HeaderSerializer>,
    default_config: OutboundConfig,
    metrics: Metrics,
}

impl MessagingProvider {
    #[must_use]
    pub fn new(
        certificate: Certificate,
        ids: Arc<dyn MessageIdGenerator>,
        names: Arc<dyn CommonNameExtractor>,
        cleaner: Arc<dyn ContentIdCleaner>,
        serializer: Arc<dyn HeaderSerializer>,
        default_config: OutboundConfig,
    ) -> Self {
        Self { certificate, ids, names, cleaner, serializer, default_config, metrics: Metrics::new() }
    }

    /// Builds the header value for one transmission.
    ///
    /// `override_config` replaces the default profile for this request, except
    /// for the agreement reference, which always comes from the default.
    ///
    /// # Errors
    /// Returns `AppError::CertificateFormat` if a common name cannot be extracted
    /// from the local or the endpoint certificate.
    pub fn create_messaging(
        &self,
        request: &TransmissionRequest,
        attachments: &[Attachment],
        override_config: Option<&OutboundConfig>,
    ) -> Result<Messaging> {
        let config = override_config.unwrap_or(&self.default_config);

        let message_info = message_info::create(request, self.ids.as_ref());
        let party_info = party_info::create(&self.certificate, request, config, self.names.as_ref())?;
        let collaboration_info =
            collaboration_info::create(request, config, &self.default_config, self.ids.as_ref());
        let message_properties = message_properties::create(request);
        let payload_info = payload_info::create(request, attachments, self.cleaner.as_ref());

        Ok(Messaging {
            user_message: UserMessage {
                message_info,
                party_info,
                collaboration_info,
                message_properties,
                payload_info,
            },
        })
    }

    /// Builds the header and binds it for the SOAP layer.
    ///
    /// # Errors
    /// Returns `AppError::CertificateFormat` as [`Self::create_messaging`] does.
    /// Returns `AppError::HeaderConstruction` if the serializer rejects the header.
    #[tracing::instrument(
        err(level = "warn"),
        skip(self, request, attachments, override_config),
        fields(ping = request.ping, attachments = attachments.len())
    )]
    pub fn create_messaging_header(
        &self,
        request: &TransmissionRequest,
        attachments: &[Attachment],
        override_config: Option<&OutboundConfig>,
    ) -> Result<SoapHeader> {
        let kind = KeyValue::new("kind", if request.ping { "ping" } else { "business" });

        let result = self.create_messaging(request, attachments, override_config).and_then(|messaging| {
            self.serializer.serialize(&MESSAGING_QNAME, &messaging).map_err(AppError::HeaderConstruction)
        });

        match &result {
            Ok(header) => {
                tracing::debug!(name = %header.name, "Messaging header built");
                self.metrics.headers_built_total.add(1, &[kind, KeyValue::new("status", "success")]);
            }
            Err(_) => {
                self.metrics.headers_built_total.add(1, &[kind, KeyValue::new("status", "failure")]);
            }
        }

        result
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::collaborators::{CommonNameExtractor, ContentIdCleaner, MessageIdGenerator};
    use crate::domain::certificate::Certificate;
    use crate::domain::identifier::{DocumentTypeIdentifier, ParticipantIdentifier, ProcessIdentifier};
    use crate::domain::transmission::{Endpoint, TransmissionHeader, TransmissionRequest};
    use crate::error::{AppError, Result};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Yields `id-1`, `id-2`, ...
    #[derive(Debug, Default)]
    pub(crate) struct CountingIdGenerator(AtomicU64);

    impl CountingIdGenerator {
        pub(crate) fn calls(&self) -> u64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl MessageIdGenerator for CountingIdGenerator {
        fn generate(&self) -> String {
            format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    /// Treats the certificate bytes as the common name itself.
    #[derive(Debug)]
    pub(crate) struct Utf8NameExtractor;

    impl CommonNameExtractor for Utf8NameExtractor {
        fn extract_common_name(&self, certificate: &Certificate) -> Result<String> {
            match std::str::from_utf8(certificate.as_der()) {
                Ok(name) if !name.is_empty() => Ok(name.to_string()),
                _ => Err(AppError::CertificateFormat("No common name".into())),
            }
        }
    }

    #[derive(Debug)]
    pub(crate) struct PassthroughCleaner;

    impl ContentIdCleaner for PassthroughCleaner {
        fn clean(&self, raw_id: &str) -> String {
            raw_id.to_string()
        }
    }

    pub(crate) fn request_to(receiver_name: &str) -> TransmissionRequest {
        TransmissionRequest::new(
            TransmissionHeader {
                sender: ParticipantIdentifier::new("iso6523-actorid-upis", "0192:810418052"),
                receiver: ParticipantIdentifier::new("iso6523-actorid-upis", "0192:923609016"),
                document_type: DocumentTypeIdentifier::new("busdox-docid-qns", "urn:invoice"),
                process: ProcessIdentifier::new("cenbii-procid-ubl", "urn:billing"),
            },
            Endpoint::new(Certificate::from_der(receiver_name.as_bytes().to_vec())),
        )
    }

    pub(crate) fn request() -> TransmissionRequest {
        request_to("Receiver AS")
    }
}
