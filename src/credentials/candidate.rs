//! Typed credential values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of credential, in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    Email,
    PhoneNumber,
    Url,
    IpAddress,
}

impl CredentialKind {
    /// All kinds, highest precedence first.
    pub const PRECEDENCE: [CredentialKind; 4] = [
        CredentialKind::Email,
        CredentialKind::PhoneNumber,
        CredentialKind::Url,
        CredentialKind::IpAddress,
    ];

    /// Method name used when submitting the credential to the server.
    pub fn method_name(self) -> &'static str {
        match self {
            CredentialKind::Email => "email",
            CredentialKind::PhoneNumber => "tel",
            CredentialKind::Url => "url",
            CredentialKind::IpAddress => "ip",
        }
    }
}

/// A validated credential.
///
/// `PhoneNumber` carries the canonical `+<country><number>` form; every
/// other variant carries the input text unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "method", content = "value")]
pub enum CredentialCandidate {
    #[serde(rename = "email")]
    Email(String),
    #[serde(rename = "tel")]
    PhoneNumber(String),
    #[serde(rename = "url")]
    Url(String),
    #[serde(rename = "ip")]
    IpAddress(String),
}

impl CredentialCandidate {
    pub fn kind(&self) -> CredentialKind {
        match self {
            CredentialCandidate::Email(_) => CredentialKind::Email,
            CredentialCandidate::PhoneNumber(_) => CredentialKind::PhoneNumber,
            CredentialCandidate::Url(_) => CredentialKind::Url,
            CredentialCandidate::IpAddress(_) => CredentialKind::IpAddress,
        }
    }

    pub fn method_name(&self) -> &'static str {
        self.kind().method_name()
    }

    /// The stored payload.
    pub fn value(&self) -> &str {
        match self {
            CredentialCandidate::Email(v)
            | CredentialCandidate::PhoneNumber(v)
            | CredentialCandidate::Url(v)
            | CredentialCandidate::IpAddress(v) => v,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            CredentialCandidate::Email(v)
            | CredentialCandidate::PhoneNumber(v)
            | CredentialCandidate::Url(v)
            | CredentialCandidate::IpAddress(v) => v,
        }
    }
}

impl fmt::Display for CredentialCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.method_name(), self.value())
    }
}
