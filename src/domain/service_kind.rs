use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The fixed set of service offerings a visitor can ask about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Website,
    Chatbot,
    Marketing,
    Automation,
    Consultation,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Chatbot => "chatbot",
            Self::Marketing => "marketing",
            Self::Automation => "automation",
            Self::Consultation => "consultation",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "website" => Ok(Self::Website),
            "chatbot" => Ok(Self::Chatbot),
            "marketing" => Ok(Self::Marketing),
            "automation" => Ok(Self::Automation),
            "consultation" => Ok(Self::Consultation),
            _ => Err("Please select a valid service".into()),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
