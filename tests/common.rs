use as4_outbound::MessagingProvider;
use as4_outbound::adapters::{CidCleaner, JsonHeaderSerializer, X509CommonNameExtractor};
use as4_outbound::config::OutboundConfig;
use as4_outbound::domain::certificate::Certificate;
use as4_outbound::domain::identifier::{DocumentTypeIdentifier, ParticipantIdentifier, ProcessIdentifier};
use as4_outbound::domain::transmission::{Endpoint, TransmissionHeader, TransmissionRequest};
use as4_outbound::services::messaging::collaborators::MessageIdGenerator;
use std::sync::Arc;
use std::sync::Once;
use std::sync::atomic::{AtomicU64, Ordering};

static INIT: Once = Once::new();

pub const OWN_COMMON_NAME: &str = "POP000001";
pub const RECEIVER_COMMON_NAME: &str = "Receiver AS";

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("as4_outbound=debug".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().init();
    });
}

/// Yields `test-1`, `test-2`, ... across threads.
#[derive(Debug, Default)]
pub struct CountingIdGenerator(AtomicU64);

impl MessageIdGenerator for CountingIdGenerator {
    fn generate(&self) -> String {
        format!("test-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

pub fn certificate_with_subject(common_name: Option<&str>) -> rcgen::Certificate {
    let mut params = rcgen::CertificateParams::new(Vec::<String>::new()).unwrap();
    params.distinguished_name = rcgen::DistinguishedName::new();
    params.distinguished_name.push(rcgen::DnType::OrganizationName, "OpenPeppol");
    if let Some(cn) = common_name {
        params.distinguished_name.push(rcgen::DnType::CommonName, cn);
    }
    let key_pair = rcgen::KeyPair::generate().unwrap();
    params.self_signed(&key_pair).unwrap()
}

pub fn certificate(common_name: &str) -> Certificate {
    Certificate::from_der(certificate_with_subject(Some(common_name)).der().to_vec())
}

#[allow(dead_code)]
pub fn provider() -> MessagingProvider {
    provider_with(OutboundConfig::peppol())
}

#[allow(dead_code)]
pub fn provider_with(default_config: OutboundConfig) -> MessagingProvider {
    setup_tracing();
    MessagingProvider::new(
        certificate(OWN_COMMON_NAME),
        Arc::new(CountingIdGenerator::default()),
        Arc::new(X509CommonNameExtractor),
        Arc::new(CidCleaner),
        Arc::new(JsonHeaderSerializer),
        default_config,
    )
}

#[allow(dead_code)]
pub fn request_to(receiver_certificate: Certificate) -> TransmissionRequest {
    TransmissionRequest::new(
        TransmissionHeader {
            sender: ParticipantIdentifier::unqualified(
                "urn:oasis:names:tc:ebcore:partyid-type:iso6523:0192:9908:810418052",
            ),
            receiver: ParticipantIdentifier::new("iso6523-actorid-upis", "0192:923609016"),
            document_type: DocumentTypeIdentifier::unqualified(
                "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2::Invoice##urn:cen.eu:en16931:2017#compliant#urn:fdc:peppol.eu:2017:poacc:billing:3.0::2.1",
            ),
            process: ProcessIdentifier::unqualified("urn:fdc:peppol.eu:2017:poacc:billing:01:1.0"),
        },
        Endpoint::new(receiver_certificate),
    )
}

#[allow(dead_code)]
pub fn request() -> TransmissionRequest {
    request_to(certificate(RECEIVER_COMMON_NAME))
}
