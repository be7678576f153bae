use std::fmt;
use std::str::FromStr;

use crate::error::ParseSizeError;

/// Known suffixes and their multipliers. Matching is exact and case-sensitive.
const SUFFIXES: &[(&str, u64)] = &[
    ("", 1),
    ("b", 512),
    ("kB", 1000),
    ("KB", 1000),
    ("K", 1024),
    ("KiB", 1024),
    ("mB", 1000 * 1000),
    ("MB", 1000 * 1000),
    ("M", 1024 * 1024),
    ("MiB", 1024 * 1024),
    ("gB", 1000 * 1000 * 1000),
    ("GB", 1000 * 1000 * 1000),
    ("G", 1024 * 1024 * 1024),
    ("GiB", 1024 * 1024 * 1024),
];

/// How much of a resource to emit before following it.
///
/// `"1K"` means the last 1024 bytes; `"+1K"` means everything from byte
/// offset 1024 onwards.
///
/// # Examples
///
/// ```
/// use rtail_fetch::SizeSpec;
///
/// let tail: SizeSpec = "4KiB".parse().unwrap();
/// assert_eq!(tail.magnitude(), 4096);
/// assert!(!tail.from_start());
///
/// let skip: SizeSpec = "+2b".parse().unwrap();
/// assert_eq!(skip.magnitude(), 1024);
/// assert!(skip.from_start());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    magnitude: u64,
    from_start: bool,
}

impl SizeSpec {
    pub fn new(magnitude: u64, from_start: bool) -> Self {
        Self { magnitude, from_start }
    }

    /// Shorthand for "the last `n` bytes".
    pub fn last(n: u64) -> Self {
        Self::new(n, false)
    }

    /// Shorthand for "starting at byte `n`".
    pub fn from_offset(n: u64) -> Self {
        Self::new(n, true)
    }

    pub fn magnitude(&self) -> u64 {
        self.magnitude
    }

    /// `true` when the magnitude is an absolute offset, `false` when it counts
    /// back from the end of the resource.
    pub fn from_start(&self) -> bool {
        self.from_start
    }

    /// Offset at which tailing starts in a resource of `total` bytes.
    pub fn offset_in(&self, total: u64) -> u64 {
        if self.from_start {
            self.magnitude
        } else {
            total.saturating_sub(self.magnitude)
        }
    }
}

impl FromStr for SizeSpec {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseSizeError(s.to_string());

        let (from_start, rest) = match s.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return Err(invalid());
        }
        let (digits, suffix) = rest.split_at(digits_end);

        let multiplier = SUFFIXES
            .iter()
            .find(|(name, _)| *name == suffix)
            .map(|(_, m)| *m)
            .ok_or_else(invalid)?;

        let magnitude = digits
            .parse::<u64>()
            .ok()
            .and_then(|value| value.checked_mul(multiplier))
            .ok_or_else(invalid)?;

        Ok(Self { magnitude, from_start })
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from_start {
            write!(f, "+{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<SizeSpec, ParseSizeError> {
        s.parse()
    }

    #[test]
    fn test_parse_plain_bytes() {
        for (input, expected) in [
            ("0", 0),
            ("123", 123),
            ("1000", 1000),
            ("1000000", 1_000_000),
            ("1234567", 1_234_567),
        ] {
            assert_eq!(parse(input), Ok(SizeSpec::last(expected)), "input {input:?}");
        }
    }

    #[test]
    fn test_parse_every_suffix() {
        for (suffix, multiplier) in SUFFIXES {
            let spec = parse(&format!("7{suffix}")).unwrap();
            assert_eq!(spec.magnitude(), 7 * multiplier, "suffix {suffix:?}");
            assert!(!spec.from_start());

            let spec = parse(&format!("+7{suffix}")).unwrap();
            assert_eq!(spec.magnitude(), 7 * multiplier, "suffix +{suffix:?}");
            assert!(spec.from_start());
        }
    }

    #[test]
    fn test_parse_blocks() {
        assert_eq!(parse("0b").unwrap().magnitude(), 0);
        assert_eq!(parse("1b").unwrap().magnitude(), 512);
        assert_eq!(parse("4b").unwrap().magnitude(), 2048);
    }

    #[test]
    fn test_parse_decimal_and_binary_units() {
        assert_eq!(parse("14kB").unwrap().magnitude(), 14_000);
        assert_eq!(parse("14KB").unwrap().magnitude(), 14_000);
        assert_eq!(parse("14K").unwrap().magnitude(), 14 * 1024);
        assert_eq!(parse("14KiB").unwrap().magnitude(), 14 * 1024);
        assert_eq!(parse("24mB").unwrap().magnitude(), 24_000_000);
        assert_eq!(parse("34MiB").unwrap().magnitude(), 34 * 1024 * 1024);
        assert_eq!(parse("69gB").unwrap().magnitude(), 69_000_000_000);
        assert_eq!(parse("98GiB").unwrap().magnitude(), 98 * 1024 * 1024 * 1024);
    }

    #[test]
    fn test_parse_plus_anchors_at_start() {
        assert_eq!(parse("+0"), Ok(SizeSpec::from_offset(0)));
        assert_eq!(parse("0"), Ok(SizeSpec::last(0)));
        assert_eq!(parse("+1K"), Ok(SizeSpec::from_offset(1024)));
        assert_eq!(parse("1K"), Ok(SizeSpec::last(1024)));
        assert_eq!(parse("+123456789"), Ok(SizeSpec::from_offset(123_456_789)));
        assert_eq!(parse("+1MB"), Ok(SizeSpec::from_offset(1_000_000)));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "+", "b123", "123B", "b", "B", "MB", "1Foo", "++1", "-1", " 1", "1 K"] {
            assert_eq!(parse(input), Err(ParseSizeError(input.to_string())), "input {input:?}");
        }
    }

    #[test]
    fn test_parse_suffix_is_case_sensitive() {
        assert!(parse("1kb").is_err());
        assert!(parse("1k").is_err());
        assert!(parse("1kib").is_err());
        assert!(parse("1Kib").is_err());
        assert_eq!(parse("1K").unwrap().magnitude(), parse("1KiB").unwrap().magnitude());
        assert_eq!(parse("1kB").unwrap().magnitude(), parse("1KB").unwrap().magnitude());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(parse("18446744073709551615").is_ok());
        assert!(parse("18446744073709551616").is_err());
        assert!(parse("18446744073709551615K").is_err());
    }

    #[test]
    fn test_error_names_the_input() {
        let err = parse("12XB").unwrap_err();
        assert_eq!(err.to_string(), "\"12XB\" is not a valid number of bytes");
    }

    #[test]
    fn test_offset_in() {
        assert_eq!(SizeSpec::last(1024).offset_in(2048), 1024);
        assert_eq!(SizeSpec::last(4096).offset_in(2048), 0);
        assert_eq!(SizeSpec::last(0).offset_in(2048), 2048);
        assert_eq!(SizeSpec::from_offset(10).offset_in(2048), 10);
    }

    #[test]
    fn test_display() {
        assert_eq!(SizeSpec::last(5).to_string(), "5");
        assert_eq!(SizeSpec::from_offset(5).to_string(), "+5");
    }
}
