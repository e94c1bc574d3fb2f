//! Credential classification.
//!
//! Turns free-form user input from enrollment and login forms into a typed
//! [`CredentialCandidate`]. Kinds are tried in a fixed precedence order
//! (email, phone, URL, IP) and the first match wins.
//!
//! Phone numbers are the odd one out: validating them produces a canonical
//! E.164 form which replaces the user's text. The other kinds keep the
//! original text verbatim.
//!
//! ```
//! use parley::credentials::{classify, region, CredentialCandidate};
//!
//! let us = region("US");
//! assert_eq!(
//!     classify("(415) 555-0100", us),
//!     Some(CredentialCandidate::PhoneNumber("+14155550100".to_string()))
//! );
//! assert_eq!(classify("not a credential", us), None);
//! ```

mod candidate;
mod classifier;
mod patterns;
mod phone;
mod region;

pub use candidate::{CredentialCandidate, CredentialKind};
pub use classifier::{classify, CredentialClassifier};
pub use phone::{canonicalize_phone, parse_phone, PhoneNumber};
pub use region::{region, region_for_calling_code, Region, REGIONS};
