use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

const MAX_LEN: usize = 256;

/// The name a visitor signed the contact form with.
///
/// Presence is the only hard requirement; the strict validation policy
/// layers a minimum length on top of this.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactName(String);

impl ContactName {
    /// Grapheme count, as seen by validation rules
    pub fn len(&self) -> usize {
        self.0.graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for ContactName {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err("Name cannot be empty".into());
        }
        if value.graphemes(true).count() > MAX_LEN {
            return Err("Name too long".into());
        }

        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
