/// Outcome of reading one numeric cell that may use a decimal comma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    /// A finite value.
    Present(f64),
    /// The cell was empty; the station did not report this value.
    Absent,
    /// The cell had content that is not a finite number.
    Invalid,
}

impl ParsedNumber {
    /// Parses `raw`, treating `,` as the decimal separator.
    ///
    /// Never fails: unparsable content becomes [`ParsedNumber::Invalid`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ParsedNumber::Absent;
        }
        match trimmed.replace(',', ".").parse::<f64>() {
            Ok(value) if value.is_finite() => ParsedNumber::Present(value),
            _ => ParsedNumber::Invalid,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            ParsedNumber::Present(v) => Some(v),
            ParsedNumber::Absent | ParsedNumber::Invalid => None,
        }
    }

    pub fn is_invalid(self) -> bool {
        matches!(self, ParsedNumber::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_comma() {
        assert_eq!(ParsedNumber::parse("25,5"), ParsedNumber::Present(25.5));
        assert_eq!(ParsedNumber::parse(" -3,25 "), ParsedNumber::Present(-3.25));
        assert_eq!(ParsedNumber::parse("1832"), ParsedNumber::Present(1832.0));
    }

    #[test]
    fn accepts_dot_decimal() {
        assert_eq!(ParsedNumber::parse("12.75"), ParsedNumber::Present(12.75));
    }

    #[test]
    fn blank_is_absent_not_invalid() {
        assert_eq!(ParsedNumber::parse(""), ParsedNumber::Absent);
        assert_eq!(ParsedNumber::parse("   "), ParsedNumber::Absent);
        assert!(!ParsedNumber::parse("").is_invalid());
    }

    #[test]
    fn garbage_and_non_finite_are_invalid() {
        assert!(ParsedNumber::parse("n/a").is_invalid());
        assert!(ParsedNumber::parse("1,2,3").is_invalid());
        assert!(ParsedNumber::parse("inf").is_invalid());
        assert!(ParsedNumber::parse("NaN").is_invalid());
        assert_eq!(ParsedNumber::parse("NaN").value(), None);
    }
}
