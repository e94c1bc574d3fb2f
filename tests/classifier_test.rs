//! Integration tests for credential classification.

use parley::credentials::{
    canonicalize_phone, classify, region, CredentialCandidate, CredentialClassifier, CredentialKind,
};
use proptest::prelude::*;

fn us() -> CredentialClassifier {
    CredentialClassifier::for_region("US").unwrap()
}

#[test]
fn test_email() {
    assert_eq!(
        us().classify("alice.smith+chat@mail.example.org"),
        Some(CredentialCandidate::Email(
            "alice.smith+chat@mail.example.org".to_string()
        ))
    );
}

#[test]
fn test_phone_formats_canonicalize_identically() {
    let classifier = us();
    for input in [
        "+1 (415) 555-0100",
        "415-555-0100",
        "(415) 555 0100",
        "1 415 555 0100",
        "415.555.0100",
        "001 415 555 0100",
    ] {
        assert_eq!(
            classifier.classify(input),
            Some(CredentialCandidate::PhoneNumber("+14155550100".to_string())),
            "input: {}",
            input
        );
    }
}

#[test]
fn test_trunk_prefix_dropped_for_national_numbers() {
    let gb = CredentialClassifier::for_region("GB").unwrap();
    assert_eq!(
        gb.classify("07911 123456"),
        Some(CredentialCandidate::PhoneNumber("+447911123456".to_string()))
    );
    assert_eq!(
        canonicalize_phone("+44 (0)7911 123456", None),
        None,
        "parenthesized trunk digit leaves a leading zero"
    );
}

#[test]
fn test_international_number_with_no_default_region() {
    assert_eq!(
        classify("+49 30 1234567", None),
        Some(CredentialCandidate::PhoneNumber("+49301234567".to_string()))
    );
    assert_eq!(classify("030 1234567", None), None);
}

#[test]
fn test_url_and_ip() {
    let classifier = us();
    assert_eq!(
        classifier.classify("https://parley.chat/login"),
        Some(CredentialCandidate::Url("https://parley.chat/login".to_string()))
    );
    assert_eq!(
        classifier.classify("10.0.0.1"),
        Some(CredentialCandidate::IpAddress("10.0.0.1".to_string()))
    );
}

#[test]
fn test_unrecognized_and_empty() {
    let classifier = us();
    assert_eq!(classifier.classify(""), None);
    assert_eq!(classifier.classify("not a credential"), None);
    assert_eq!(classifier.classify("alice@"), None);
    assert_eq!(classifier.classify("999.1.1.1"), None);
}

#[test]
fn test_precedence_order() {
    assert_eq!(
        CredentialKind::PRECEDENCE,
        [
            CredentialKind::Email,
            CredentialKind::PhoneNumber,
            CredentialKind::Url,
            CredentialKind::IpAddress,
        ]
    );
}

#[test]
fn test_serialized_form() {
    let candidate = us().classify("alice@example.com").unwrap();
    let json = serde_json::to_value(&candidate).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "method": "email", "value": "alice@example.com" })
    );
    assert_eq!(candidate.to_string(), "email:alice@example.com");
}

#[test]
fn test_region_lookup_is_case_insensitive() {
    assert_eq!(region("gb").map(|r| r.code), Some("GB"));
    assert!(region("ZZ").is_none());
}

#[test]
fn test_trunk_digit_that_starts_the_number() {
    assert_eq!(
        classify("800 555 35 35", region("RU")),
        Some(CredentialCandidate::PhoneNumber("+78005553535".to_string()))
    );
}

#[test]
fn test_international_numbers_outside_home_region() {
    let classifier = us();
    for (input, canonical) in [
        ("+39 06 6982 1234", "+390669821234"),
        ("+52 55 1234 5678", "+525512345678"),
        ("+34 912 345 678", "+34912345678"),
    ] {
        assert_eq!(
            classifier.classify(input),
            Some(CredentialCandidate::PhoneNumber(canonical.to_string())),
            "input: {}",
            input
        );
    }
}

/// National-format input for a region: trunk prefix, then the national
/// significant number split into groups.
fn national_input() -> impl Strategy<Value = (&'static str, String)> {
    prop_oneof![
        "[1-9][0-9]{9}".prop_map(|nsn| ("GB", format!("0{} {}", &nsn[..4], &nsn[4..]))),
        "[1-9][0-9]{5,12}".prop_map(|nsn| ("DE", format!("0{} {}", &nsn[..2], &nsn[2..]))),
        "[1-9][0-9]{9}".prop_map(|nsn| {
            (
                "RU",
                format!("8 ({}) {}-{}", &nsn[..3], &nsn[3..6], &nsn[6..]),
            )
        }),
    ]
}

proptest! {
    #[test]
    fn prop_canonical_phone_classifies_to_itself((code, input) in national_input()) {
        let home = region(code);
        let canonical = match classify(&input, home) {
            Some(CredentialCandidate::PhoneNumber(canonical)) => canonical,
            other => return Err(TestCaseError::fail(format!("{:?} -> {:?}", input, other))),
        };
        prop_assert!(canonical.starts_with('+'));

        prop_assert_eq!(
            classify(&canonical, home),
            Some(CredentialCandidate::PhoneNumber(canonical.clone()))
        );
        prop_assert_eq!(
            classify(&canonical, region("US")),
            Some(CredentialCandidate::PhoneNumber(canonical.clone()))
        );
        prop_assert_eq!(
            classify(&canonical, None),
            Some(CredentialCandidate::PhoneNumber(canonical))
        );
    }
}
