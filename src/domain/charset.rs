use std::fmt;
use std::str::FromStr;

/// Standard names paired with the labels that resolve to them.
const KNOWN_CHARSETS: &[(&str, &[&str])] = &[
    ("UTF-8", &["utf-8", "utf8", "unicode-1-1-utf-8"]),
    ("UTF-16", &["utf-16", "utf16", "unicode"]),
    ("UTF-16BE", &["utf-16be", "utf_16be", "x-utf-16be"]),
    ("UTF-16LE", &["utf-16le", "utf_16le", "x-utf-16le"]),
    ("US-ASCII", &["us-ascii", "ascii", "iso646-us", "ansi_x3.4-1968", "cp367"]),
    ("ISO-8859-1", &["iso-8859-1", "iso8859-1", "iso8859_1", "latin1", "l1", "cp819"]),
    ("ISO-8859-15", &["iso-8859-15", "iso8859-15", "iso8859_15", "latin9", "l9"]),
    ("windows-1252", &["windows-1252", "cp1252"]),
];

/// A payload character set, held by its standard name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Charset(&'static str);

impl Charset {
    pub const UTF_8: Self = Self("UTF-8");

    /// The standard name, e.g. `UTF-8`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl FromStr for Charset {
    type Err = String;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let needle = label.trim().to_ascii_lowercase();
        KNOWN_CHARSETS
            .iter()
            .find(|(_, labels)| labels.contains(&needle.as_str()))
            .map(|(name, _)| Self(name))
            .ok_or_else(|| format!("Unsupported character set: {label}"))
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_resolve_to_standard_name() {
        assert_eq!("utf8".parse::<Charset>().unwrap(), Charset::UTF_8);
        assert_eq!(" Latin1 ".parse::<Charset>().unwrap().name(), "ISO-8859-1");
        assert_eq!("CP1252".parse::<Charset>().unwrap().name(), "windows-1252");
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!("klingon-8".parse::<Charset>().is_err());
    }
}
