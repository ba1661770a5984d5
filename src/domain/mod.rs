pub mod attachment;
pub mod certificate;
pub mod charset;
pub mod identifier;
pub mod messaging;
pub mod transmission;
