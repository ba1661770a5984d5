pub mod content_id;
pub mod id_generator;
pub mod soap;
pub mod x509;

pub use content_id::CidCleaner;
pub use id_generator::UuidMessageIdGenerator;
pub use soap::JsonHeaderSerializer;
pub use x509::X509CommonNameExtractor;
