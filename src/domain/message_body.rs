use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

/// The free-text body of a contact-form submission.
///
/// Presence is the only hard requirement; the strict validation policy
/// layers a minimum length on top of this.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBody(String);

impl MessageBody {
    /// Grapheme count, as seen by validation rules
    pub fn len(&self) -> usize {
        self.0.graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for MessageBody {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err("Message cannot be empty".into());
        }

        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
