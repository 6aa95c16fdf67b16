use crate::addr::error::AddrError;
use crate::addr::ipv4::{Ipv4, OCTETS};
use crate::split::split;
use regex::Regex;

/// Optional minus sign followed by decimal digits, nothing else.
/// Negative tokens are integers, so they fail as out of range rather than as format.
const INT_TOKEN_RE: &str = r"^-?[0-9]+$";

/// Validates dotted IPv4 text against a precompiled token regex.
#[derive(Debug, Clone)]
pub struct AddrParser {
    int_token: Regex,
}

impl AddrParser {
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            int_token: Regex::new(INT_TOKEN_RE)?,
        })
    }

    /// Parse "a.b.c.d". The text is split on '.' without trimming.
    pub fn parse(&self, field: &str) -> Result<Ipv4, AddrError> {
        self.parse_octets(&split(field, '.'))
    }

    /// Build an address from exactly four octet strings.
    pub fn parse_octets<S: AsRef<str>>(&self, fields: &[S]) -> Result<Ipv4, AddrError> {
        if fields.len() != OCTETS {
            return Err(AddrError::Format(format!(
                "expected {} octets, got {}",
                OCTETS,
                fields.len()
            )));
        }

        let mut octets = [0u8; OCTETS];
        for (slot, field) in octets.iter_mut().zip(fields) {
            *slot = self.parse_octet(field.as_ref())?;
        }
        let text = std::array::from_fn(|i| fields[i].as_ref().to_string());

        Ok(Ipv4::from_parts(octets, text))
    }

    fn parse_octet(&self, s: &str) -> Result<u8, AddrError> {
        if !self.int_token.is_match(s) {
            return Err(AddrError::Format(format!("octet is not an integer: {:?}", s)));
        }
        // Digits-only tokens can still overflow i64; that is a range failure too.
        s.parse::<i64>()
            .ok()
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| AddrError::Range(format!("octet {} is outside 0-255", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parser() -> AddrParser {
        AddrParser::new().unwrap()
    }

    fn is_format(r: Result<Ipv4, AddrError>) -> bool {
        matches!(r, Err(AddrError::Format(_)))
    }

    fn is_range(r: Result<Ipv4, AddrError>) -> bool {
        matches!(r, Err(AddrError::Range(_)))
    }

    #[test]
    fn parses_plain_address() {
        let ip = parser().parse("192.168.0.1").unwrap();
        assert_eq!(ip.octets(), &[192, 168, 0, 1]);
        assert_eq!(ip.text().join("."), "192.168.0.1");
    }

    #[test]
    fn keeps_leading_zeros_in_text() {
        for s in ["001.02.0003.4", "0.0.0.0", "255.255.255.255", "00.000.0.0255"] {
            let ip = parser().parse(s).unwrap();
            assert_eq!(ip.text().join("."), s);
        }
        assert_eq!(parser().parse("00.000.0.0255").unwrap().octets(), &[0, 0, 0, 255]);
    }

    #[test]
    fn from_split_fields() {
        let ip = parser().parse_octets(&["46", "70", "225", "39"]).unwrap();
        assert_eq!(ip.key(), u32::from_be_bytes([46, 70, 225, 39]));
    }

    #[test]
    fn wrong_arity_is_format_error() {
        let p = parser();
        assert!(is_format(p.parse("1.2.3")));
        assert!(is_format(p.parse("1.2.3.4.5")));
        assert!(is_format(p.parse("")));
        assert!(is_format(p.parse_octets::<&str>(&[])));
    }

    #[test]
    fn non_numeric_is_format_error() {
        let p = parser();
        assert!(is_format(p.parse("1.2.x.4")));
        assert!(is_format(p.parse("1.2.3a.4")));
        assert!(is_format(p.parse("1..3.4")));
        assert!(is_format(p.parse(" 1.2.3.4")));
        assert!(is_format(p.parse("1.2.3.4 ")));
        assert!(is_format(p.parse("+1.2.3.4")));
    }

    #[test]
    fn out_of_range_is_range_error() {
        let p = parser();
        assert!(is_range(p.parse("1.2.256.4")));
        assert!(is_range(p.parse("1.2.-1.4")));
        assert!(is_range(p.parse("1.2.3.99999999999999999999")));
    }

    #[test]
    fn arity_is_checked_before_octets() {
        // Five fields, one of them out of range: arity wins.
        assert!(is_format(parser().parse("1.2.300.4.5")));
    }

    #[test]
    fn errors_name_the_rule() {
        let err = parser().parse("1.2.256.4").unwrap_err();
        assert_eq!(err.to_string(), "range error: octet 256 is outside 0-255");
        let err = parser().parse("1.2.3").unwrap_err();
        assert_eq!(err.to_string(), "format error: expected 4 octets, got 3");
    }

    #[test]
    fn minus_zero_is_zero() {
        let ip = parser().parse("-0.0.0.1").unwrap();
        assert_eq!(ip.octets(), &[0, 0, 0, 1]);
        assert_eq!(ip.to_string(), "-0.0.0.1");
    }
}
