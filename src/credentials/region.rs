//! Fixed phone numbering metadata.
//!
//! Only what canonicalization needs: calling code, trunk prefix and the
//! allowed lengths of the national significant number. The table is part
//! of the build, so classification results are stable across runs.

/// Numbering rules for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// Country calling code without the `+`.
    pub calling_code: &'static str,
    /// Digits dialled before a national number, stripped when present.
    pub trunk_prefix: Option<&'static str>,
    pub min_national_len: usize,
    pub max_national_len: usize,
    /// Whether national numbers may begin with `0` (e.g. Italian landlines).
    pub leading_zero: bool,
}

impl Region {
    /// North American Numbering Plan regions share `+1`.
    pub fn is_nanp(&self) -> bool {
        self.calling_code == "1"
    }

    /// Whether `national` is a plausible national significant number here.
    pub fn accepts(&self, national: &str) -> bool {
        let len = national.len();
        if len < self.min_national_len || len > self.max_national_len {
            return false;
        }
        let bytes = national.as_bytes();
        if self.is_nanp() {
            // NXX-NXX-XXXX: area code and exchange never start with 0 or 1.
            matches!(bytes[0], b'2'..=b'9') && matches!(bytes[3], b'2'..=b'9')
        } else {
            self.leading_zero || bytes[0] != b'0'
        }
    }
}

const fn entry(
    code: &'static str,
    calling_code: &'static str,
    trunk_prefix: Option<&'static str>,
    min_national_len: usize,
    max_national_len: usize,
) -> Region {
    Region {
        code,
        calling_code,
        trunk_prefix,
        min_national_len,
        max_national_len,
        leading_zero: false,
    }
}

const fn keeps_leading_zero(region: Region) -> Region {
    Region {
        leading_zero: true,
        ..region
    }
}

/// Known regions. Shared calling codes resolve to the first entry.
pub static REGIONS: &[Region] = &[
    entry("US", "1", Some("1"), 10, 10),
    entry("CA", "1", Some("1"), 10, 10),
    entry("GB", "44", Some("0"), 9, 10),
    entry("DE", "49", Some("0"), 6, 13),
    entry("FR", "33", Some("0"), 9, 9),
    entry("IN", "91", Some("0"), 10, 10),
    entry("CN", "86", Some("0"), 10, 11),
    entry("RU", "7", Some("8"), 10, 10),
    entry("JP", "81", Some("0"), 9, 10),
    entry("AU", "61", Some("0"), 9, 9),
    entry("BR", "55", Some("0"), 10, 11),
    keeps_leading_zero(entry("IT", "39", None, 6, 11)),
    entry("ES", "34", None, 9, 9),
    entry("MX", "52", None, 10, 10),
    entry("NL", "31", Some("0"), 9, 9),
    entry("CH", "41", Some("0"), 9, 9),
    entry("SE", "46", Some("0"), 7, 9),
    entry("PL", "48", None, 9, 9),
    entry("KR", "82", Some("0"), 8, 10),
    entry("ZA", "27", Some("0"), 9, 9),
];

/// Look up a region by its ISO code, case-insensitively.
pub fn region(code: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.code.eq_ignore_ascii_case(code.trim()))
}

/// Look up the region owning a calling code.
pub fn region_for_calling_code(calling_code: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.calling_code == calling_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_lookup_is_case_insensitive() {
        assert_eq!(region("us").map(|r| r.code), Some("US"));
        assert_eq!(region(" GB ").map(|r| r.code), Some("GB"));
        assert!(region("XX").is_none());
    }

    #[test]
    fn test_shared_calling_code_resolves_to_first() {
        assert_eq!(region_for_calling_code("1").map(|r| r.code), Some("US"));
        assert_eq!(region_for_calling_code("44").map(|r| r.code), Some("GB"));
        assert!(region_for_calling_code("999").is_none());
    }

    #[test]
    fn test_nanp_rules() {
        let us = region("US").unwrap();
        assert!(us.accepts("4155550100"));
        assert!(!us.accepts("1155550100"));
        assert!(!us.accepts("4151550100"));
        assert!(!us.accepts("415555010"));
    }

    #[test]
    fn test_leading_zero_rejected_outside_nanp() {
        let gb = region("GB").unwrap();
        assert!(gb.accepts("2079460958"));
        assert!(!gb.accepts("0207946095"));
    }

    #[test]
    fn test_italian_numbers_keep_leading_zero() {
        let it = region("IT").unwrap();
        assert!(it.accepts("0669821234"));
        assert!(it.accepts("3123456789"));
        assert!(!it.accepts("06123"));
    }

    #[test]
    fn test_calling_codes_are_prefix_free() {
        for a in REGIONS {
            for b in REGIONS {
                if a.calling_code != b.calling_code {
                    assert!(!b.calling_code.starts_with(a.calling_code));
                }
            }
        }
    }
}
