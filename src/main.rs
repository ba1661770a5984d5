#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use anyhow::Context;
use as4_outbound::adapters::{CidCleaner, JsonHeaderSerializer, UuidMessageIdGenerator, X509CommonNameExtractor};
use as4_outbound::config::{Config, TransmissionArgs};
use as4_outbound::domain::attachment::Attachment;
use as4_outbound::domain::certificate::Certificate;
use as4_outbound::domain::charset::Charset;
use as4_outbound::domain::identifier::{DocumentTypeIdentifier, ParticipantIdentifier, ProcessIdentifier};
use as4_outbound::domain::transmission::{Endpoint, TransmissionHeader, TransmissionRequest};
use as4_outbound::{MessagingProvider, telemetry};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config = Config::load();
    let telemetry_guard = telemetry::init_telemetry(&config.telemetry)?;

    let own_certificate = read_certificate(&config.identity.certificate)?;
    let provider = MessagingProvider::new(
        own_certificate,
        Arc::new(UuidMessageIdGenerator::new(config.identity.message_id_domain.clone())),
        Arc::new(X509CommonNameExtractor),
        Arc::new(CidCleaner),
        Arc::new(JsonHeaderSerializer),
        config.outbound.clone(),
    );

    let (request, attachments) = transmission(&config.transmission)?;
    let header = provider.create_messaging_header(&request, &attachments, None)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &header)?;
    writeln!(stdout)?;

    telemetry_guard.shutdown();
    Ok(())
}

fn read_certificate(path: &Path) -> anyhow::Result<Certificate> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read certificate {}", path.display()))?;
    Ok(Certificate::from_pem_or_der(bytes)?)
}

fn transmission(args: &TransmissionArgs) -> anyhow::Result<(TransmissionRequest, Vec<Attachment>)> {
    let header = TransmissionHeader {
        sender: ParticipantIdentifier::parse(&args.sender),
        receiver: ParticipantIdentifier::parse(&args.receiver),
        document_type: DocumentTypeIdentifier::parse(&args.document_type),
        process: ProcessIdentifier::parse(&args.process),
    };
    let endpoint = Endpoint::new(read_certificate(&args.receiver_certificate)?);

    let mut request = TransmissionRequest::new(header, endpoint).with_ping(args.ping);
    request.message_id.clone_from(&args.message_id);
    request.ref_to_message_id.clone_from(&args.ref_to_message_id);
    request.conversation_id.clone_from(&args.conversation_id);
    if let Some(label) = &args.payload_charset {
        request.payload_charset = Some(label.parse::<Charset>().map_err(anyhow::Error::msg)?);
    }
    if !args.properties.is_empty() {
        request.message_properties = Some(args.properties.iter().cloned().collect());
    }

    let attachments = args
        .attachments
        .iter()
        .map(|id| Attachment::new(id.as_str()).with_header("Content-ID", format!("<{id}>")))
        .collect();

    Ok((request, attachments))
}
