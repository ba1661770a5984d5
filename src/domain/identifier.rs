use std::fmt;

const SCHEME_SEPARATOR: &str = "::";

macro_rules! qualified_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            scheme: Option<String>,
            identifier: String,
        }

        impl $name {
            pub fn new(scheme: impl Into<String>, identifier: impl Into<String>) -> Self {
                Self { scheme: Some(scheme.into()), identifier: identifier.into() }
            }

            pub fn unqualified(identifier: impl Into<String>) -> Self {
                Self { scheme: None, identifier: identifier.into() }
            }

            /// Parses `scheme::identifier`; input without a separator is unqualified.
            #[must_use]
            pub fn parse(raw: &str) -> Self {
                match raw.split_once(SCHEME_SEPARATOR) {
                    Some((scheme, identifier)) if !scheme.is_empty() => Self::new(scheme, identifier),
                    _ => Self::unqualified(raw),
                }
            }

            #[must_use]
            pub fn scheme(&self) -> Option<&str> {
                self.scheme.as_deref()
            }

            #[must_use]
            pub fn identifier(&self) -> &str {
                &self.identifier
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.scheme {
                    Some(scheme) => write!(f, "{scheme}{SCHEME_SEPARATOR}{}", self.identifier),
                    None => f.write_str(&self.identifier),
                }
            }
        }
    };
}

qualified_identifier!(
    /// A business endpoint, e.g. `iso6523-actorid-upis::0192:810418052`.
    ParticipantIdentifier
);
qualified_identifier!(
    /// The document type carried by a transmission.
    DocumentTypeIdentifier
);
qualified_identifier!(
    /// The business process a transmission belongs to.
    ProcessIdentifier
);
