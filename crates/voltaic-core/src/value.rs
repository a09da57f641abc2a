//! Component values.
//!
//! A [`Value`] is either numeric (magnitude, optional SI prefix, unit) or a
//! free-form symbolic string such as a part number. Values are carried as
//! written; no unit conversion happens anywhere.

use std::fmt;

/// SI prefix attached to a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiPrefix {
    Pico,
    Nano,
    Micro,
    Milli,
    Kilo,
    Mega,
    Giga,
}

impl SiPrefix {
    /// Parses a single prefix character. Both `u` and `µ` mean micro.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(Self::Pico),
            'n' => Some(Self::Nano),
            'u' | 'µ' | 'μ' => Some(Self::Micro),
            'm' => Some(Self::Milli),
            'k' | 'K' => Some(Self::Kilo),
            'M' => Some(Self::Mega),
            'G' => Some(Self::Giga),
            _ => None,
        }
    }

    /// Canonical symbol of the prefix.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pico => "p",
            Self::Nano => "n",
            Self::Micro => "µ",
            Self::Milli => "m",
            Self::Kilo => "k",
            Self::Mega => "M",
            Self::Giga => "G",
        }
    }

    /// Decimal exponent of the prefix.
    pub fn exponent(self) -> i32 {
        match self {
            Self::Pico => -12,
            Self::Nano => -9,
            Self::Micro => -6,
            Self::Milli => -3,
            Self::Kilo => 3,
            Self::Mega => 6,
            Self::Giga => 9,
        }
    }
}

/// A component value as written in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A number with an optional SI prefix and an optional unit, e.g. `22k`, `100nF`.
    Numeric {
        magnitude: f64,
        prefix: Option<SiPrefix>,
        unit: String,
    },
    /// Anything that is not a well-formed number, e.g. `1N4148`, `TL072`.
    Symbolic(String),
}

impl Value {
    /// Classifies a value token.
    ///
    /// Accepts `<digits>[.<digits>][prefix][unit]` as well as the infix
    /// notation `4k7` (= 4.7k). Units are alphabetic (plus `Ω`). Anything
    /// else becomes [`Value::Symbolic`].
    ///
    /// # Examples
    ///
    /// ```
    /// use voltaic_core::value::{SiPrefix, Value};
    ///
    /// assert_eq!(
    ///     Value::parse("22k"),
    ///     Value::Numeric { magnitude: 22.0, prefix: Some(SiPrefix::Kilo), unit: String::new() }
    /// );
    /// assert_eq!(Value::parse("1N4148"), Value::Symbolic("1N4148".to_string()));
    /// ```
    pub fn parse(text: &str) -> Self {
        Self::parse_numeric(text).unwrap_or_else(|| Self::Symbolic(text.to_string()))
    }

    fn parse_numeric(text: &str) -> Option<Self> {
        let int_end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        if int_end == 0 {
            return None;
        }
        let (int_part, mut rest) = text.split_at(int_end);

        let mut number = int_part.to_string();
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_end = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            if frac_end == 0 {
                return None;
            }
            number.push('.');
            number.push_str(&after_dot[..frac_end]);
            rest = &after_dot[frac_end..];
        }

        let mut prefix = None;
        let leading_prefix = rest
            .chars()
            .next()
            .and_then(|c| SiPrefix::from_char(c).map(|p| (c, p)));
        if let Some((c, p)) = leading_prefix {
            let after_prefix = &rest[c.len_utf8()..];
            let infix_end = after_prefix
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_prefix.len());

            // `4k7` style: the prefix doubles as the decimal point.
            if infix_end > 0 && !number.contains('.') {
                number.push('.');
                number.push_str(&after_prefix[..infix_end]);
                prefix = Some(p);
                rest = &after_prefix[infix_end..];
            } else if infix_end == 0 && Self::is_unit(after_prefix) {
                prefix = Some(p);
                rest = after_prefix;
            }
        }

        if !Self::is_unit(rest) {
            return None;
        }

        let magnitude = number.parse::<f64>().ok()?;
        Some(Self::Numeric {
            magnitude,
            prefix,
            unit: rest.to_string(),
        })
    }

    fn is_unit(text: &str) -> bool {
        text.chars().all(|c| c.is_alphabetic() || c == 'Ω')
    }

    /// Magnitude scaled by the prefix, for numeric values.
    pub fn scaled(&self) -> Option<f64> {
        match self {
            Self::Numeric {
                magnitude, prefix, ..
            } => Some(magnitude * 10f64.powi(prefix.map_or(0, SiPrefix::exponent))),
            Self::Symbolic(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric {
                magnitude,
                prefix,
                unit,
            } => {
                write!(f, "{magnitude}")?;
                if let Some(prefix) = prefix {
                    f.write_str(prefix.symbol())?;
                }
                f.write_str(unit)
            }
            Self::Symbolic(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn numeric(magnitude: f64, prefix: Option<SiPrefix>, unit: &str) -> Value {
        Value::Numeric {
            magnitude,
            prefix,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(Value::parse("100"), numeric(100.0, None, ""));
    }

    #[test]
    fn test_prefix_and_unit() {
        assert_eq!(
            Value::parse("100nF"),
            numeric(100.0, Some(SiPrefix::Nano), "F")
        );
        assert_eq!(
            Value::parse("4.7uF"),
            numeric(4.7, Some(SiPrefix::Micro), "F")
        );
        assert_eq!(Value::parse("1M"), numeric(1.0, Some(SiPrefix::Mega), ""));
    }

    #[test]
    fn test_unit_without_prefix() {
        assert_eq!(Value::parse("9V"), numeric(9.0, None, "V"));
        assert_eq!(Value::parse("10Ohm"), numeric(10.0, None, "Ohm"));
    }

    #[test]
    fn test_infix_notation() {
        assert_eq!(Value::parse("4k7"), numeric(4.7, Some(SiPrefix::Kilo), ""));
    }

    #[test]
    fn test_symbolic_values() {
        for text in ["1N4148", "TL072", "2N3904", "abc", "1.", ".5"] {
            assert_eq!(Value::parse(text), Value::Symbolic(text.to_string()));
        }
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(Value::parse("22k").to_string(), "22k");
        assert_eq!(Value::parse("100nF").to_string(), "100nF");
        assert_eq!(Value::parse("1N4148").to_string(), "1N4148");
    }

    #[test]
    fn test_scaled() {
        assert_approx_eq!(f64, Value::parse("22k").scaled().unwrap(), 22_000.0);
        assert_eq!(Value::parse("TL072").scaled(), None);
    }
}
