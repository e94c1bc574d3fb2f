//! Phone number parsing and canonicalization.

use std::fmt;

use super::region::{region_for_calling_code, Region};

/// Longest country calling code, in digits.
const MAX_CALLING_CODE_LEN: usize = 3;

/// A parsed phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    region: &'static Region,
    national: String,
}

impl PhoneNumber {
    pub fn region(&self) -> &'static Region {
        self.region
    }

    pub fn calling_code(&self) -> &'static str {
        self.region.calling_code
    }

    /// National significant number (no trunk prefix).
    pub fn national_number(&self) -> &str {
        &self.national
    }

    /// Canonical form: `+<calling code><national number>`.
    pub fn e164(&self) -> String {
        format!("+{}{}", self.region.calling_code, self.national)
    }

    /// Human-readable international form, e.g. `+1 415-555-0100`.
    pub fn international(&self) -> String {
        if self.region.is_nanp() {
            let (area, rest) = self.national.split_at(3);
            let (exchange, line) = rest.split_at(3);
            format!("+1 {}-{}-{}", area, exchange, line)
        } else {
            format!("+{} {}", self.region.calling_code, self.national)
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.e164())
    }
}

/// Parse `text` as a phone number.
///
/// Numbers written with `+` or `00` carry their own country code; anything
/// else needs `default_region`. Returns `None` when no country can be
/// resolved or the digits do not fit the region's numbering rules.
pub fn parse_phone(text: &str, default_region: Option<&'static Region>) -> Option<PhoneNumber> {
    let (international, digits) = extract_digits(text)?;

    if international {
        return parse_international(&digits);
    }

    let region = default_region?;
    // The trunk prefix is only dropped when what remains is a valid number;
    // otherwise its digit belongs to the number itself.
    region
        .trunk_prefix
        .and_then(|trunk| digits.strip_prefix(trunk))
        .and_then(|national| build(region, national))
        .or_else(|| build(region, &digits))
}

/// Canonical E.164 form of `text`, if it parses.
pub fn canonicalize_phone(text: &str, default_region: Option<&'static Region>) -> Option<String> {
    parse_phone(text, default_region).map(|number| number.e164())
}

fn parse_international(digits: &str) -> Option<PhoneNumber> {
    (1..=MAX_CALLING_CODE_LEN.min(digits.len())).rev().find_map(|len| {
        let (code, national) = digits.split_at(len);
        region_for_calling_code(code).and_then(|region| build(region, national))
    })
}

fn build(region: &'static Region, national: &str) -> Option<PhoneNumber> {
    if region.accepts(national) {
        Some(PhoneNumber {
            region,
            national: national.to_string(),
        })
    } else {
        None
    }
}

/// Strip formatting. Returns whether the number was written in
/// international form, and its digits (without `+`/`00`).
fn extract_digits(text: &str) -> Option<(bool, String)> {
    let trimmed = text.trim();
    let (mut international, body) = match trimmed.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut digits = String::with_capacity(body.len());
    for c in body.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return None,
        }
    }

    if !international {
        if let Some(rest) = digits.strip_prefix("00") {
            international = true;
            digits = rest.to_string();
        }
    }

    if digits.is_empty() {
        None
    } else {
        Some((international, digits))
    }
}
