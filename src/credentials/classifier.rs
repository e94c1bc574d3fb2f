//! Precedence-ordered credential classification.

use super::candidate::{CredentialCandidate, CredentialKind};
use super::patterns::{is_email, is_ip_address, is_url};
use super::phone::canonicalize_phone;
use super::region::{region, Region};

/// Classifies user input against the known credential kinds.
///
/// The only configuration is the default phone region used for numbers
/// written without a country code. Classification is otherwise pure:
/// the same input always yields the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialClassifier {
    default_region: Option<&'static Region>,
}

impl CredentialClassifier {
    pub fn new(default_region: Option<&'static Region>) -> Self {
        Self { default_region }
    }

    /// Classifier for an ISO region code. `None` if the region is unknown.
    pub fn for_region(code: &str) -> Option<Self> {
        region(code).map(|r| Self::new(Some(r)))
    }

    pub fn default_region(&self) -> Option<&'static Region> {
        self.default_region
    }

    /// Return the first credential kind `text` validates as, in
    /// [`CredentialKind::PRECEDENCE`] order.
    pub fn classify(&self, text: &str) -> Option<CredentialCandidate> {
        if text.is_empty() {
            return None;
        }
        CredentialKind::PRECEDENCE
            .iter()
            .find_map(|kind| self.validate(*kind, text))
    }

    /// Validate `text` as one specific kind.
    pub fn validate(&self, kind: CredentialKind, text: &str) -> Option<CredentialCandidate> {
        match kind {
            CredentialKind::Email => {
                is_email(text).then(|| CredentialCandidate::Email(text.to_string()))
            }
            CredentialKind::PhoneNumber => match canonicalize_phone(text, self.default_region) {
                Some(canonical) => Some(CredentialCandidate::PhoneNumber(canonical)),
                None => {
                    tracing::debug!("Not a phone number credential: {:?}", text);
                    None
                }
            },
            CredentialKind::Url => is_url(text).then(|| CredentialCandidate::Url(text.to_string())),
            CredentialKind::IpAddress => {
                is_ip_address(text).then(|| CredentialCandidate::IpAddress(text.to_string()))
            }
        }
    }
}

/// Classify `text` using `default_region` for national phone numbers.
pub fn classify(text: &str, default_region: Option<&'static Region>) -> Option<CredentialCandidate> {
    CredentialClassifier::new(default_region).classify(text)
}
