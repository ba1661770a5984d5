use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

pub const PEPPOL_PARTY_ID_TYPE: &str = "urn:fdc:peppol.eu:2017:identifiers:ap";
pub const PEPPOL_FROM_ROLE: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/initiator";
pub const PEPPOL_TO_ROLE: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/responder";
pub const PEPPOL_SERVICE_TYPE: &str = "cenbii-procid-ubl";
pub const PEPPOL_AGREEMENT_REF: &str = "urn:fdc:peppol.eu:2017:agreements:tia:ap_provider";

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub outbound: OutboundConfig,

    #[command(flatten)]
    pub identity: IdentityConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    #[command(flatten)]
    pub transmission: TransmissionArgs,
}

/// Outbound AS4 profile.
///
/// One instance is the process-wide default; a request may be built against
/// another instance as an override.
#[derive(Clone, Debug, PartialEq, Eq, Args)]
pub struct OutboundConfig {
    /// Type attribute of both party identifiers
    #[arg(long, env = "AS4_PARTY_ID_TYPE", default_value = PEPPOL_PARTY_ID_TYPE)]
    pub party_id_type: String,

    /// Role of the sending party
    #[arg(long, env = "AS4_FROM_ROLE", default_value = PEPPOL_FROM_ROLE)]
    pub from_role: String,

    /// Role of the receiving party
    #[arg(long, env = "AS4_TO_ROLE", default_value = PEPPOL_TO_ROLE)]
    pub to_role: String,

    /// Type attribute of the collaboration service
    #[arg(long, env = "AS4_SERVICE_TYPE", default_value = PEPPOL_SERVICE_TYPE)]
    pub service_type: String,

    /// Agreement reference (an empty value disables it)
    #[arg(long, env = "AS4_AGREEMENT_REF", default_value = PEPPOL_AGREEMENT_REF)]
    pub agreement_ref: Option<String>,
}

impl OutboundConfig {
    #[must_use]
    pub fn peppol() -> Self {
        Self {
            party_id_type: PEPPOL_PARTY_ID_TYPE.to_string(),
            from_role: PEPPOL_FROM_ROLE.to_string(),
            to_role: PEPPOL_TO_ROLE.to_string(),
            service_type: PEPPOL_SERVICE_TYPE.to_string(),
            agreement_ref: Some(PEPPOL_AGREEMENT_REF.to_string()),
        }
    }

    /// The agreement reference, if one is configured and non-empty.
    #[must_use]
    pub fn agreement_ref(&self) -> Option<&str> {
        self.agreement_ref.as_deref().filter(|s| !s.is_empty())
    }
}

impl Default for OutboundConfig {
    fn default() -> Self {
        Self::peppol()
    }
}

#[derive(Clone, Debug, Args)]
pub struct IdentityConfig {
    /// Local access point certificate (PEM or DER)
    #[arg(long, env = "AS4_CERTIFICATE")]
    pub certificate: PathBuf,

    /// Domain appended to generated message identifiers (`<uuid>@<domain>`)
    #[arg(long, env = "AS4_MESSAGE_ID_DOMAIN")]
    pub message_id_domain: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "AS4_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// OTLP collector endpoint; traces and metrics are exported when set
    #[arg(long, env = "AS4_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

/// Arguments for the `as4-header` diagnostic binary.
#[derive(Clone, Debug, Args)]
pub struct TransmissionArgs {
    /// Sender participant identifier (`scheme::value` or bare value)
    #[arg(long)]
    pub sender: String,

    /// Receiver participant identifier (`scheme::value` or bare value)
    #[arg(long)]
    pub receiver: String,

    /// Document type identifier
    #[arg(long)]
    pub document_type: String,

    /// Process identifier
    #[arg(long)]
    pub process: String,

    /// Receiver access point certificate (PEM or DER)
    #[arg(long)]
    pub receiver_certificate: PathBuf,

    /// Build a connectivity test message
    #[arg(long, default_value_t = false)]
    pub ping: bool,

    #[arg(long)]
    pub message_id: Option<String>,

    #[arg(long)]
    pub ref_to_message_id: Option<String>,

    #[arg(long)]
    pub conversation_id: Option<String>,

    /// Character set of the payload parts
    #[arg(long)]
    pub payload_charset: Option<String>,

    /// Additional message property as `name=value`
    #[arg(long = "property", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    /// Attachment content id; may be repeated
    #[arg(long = "attachment")]
    pub attachments: Vec<String>,
}

fn parse_property(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("Invalid property '{raw}' (expected name=value)"))
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
