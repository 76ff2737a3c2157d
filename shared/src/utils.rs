// Helpers shared across the engine and GUI.

/// Brazilian number notation: `.` groups thousands, `,` separates decimals.
pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    pub const THOUSAND_SEPARATOR: &str = ".";
    pub const DECIMAL_SEPARATOR: &str = ",";

    // Parses decimals like "1.234,56" or "123,45" into f64
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let normalized = s.trim()
            .replace('.', "")  // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        f64::from_str(&normalized)
            .map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// Inserts `separator` between every group of three digits, counting from the right.
    pub fn group_thousands(digits: &str, separator: &str) -> String {
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3 * separator.len());
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push_str(separator);
            }
            grouped.push(ch);
        }
        grouped
    }

    /// A non-negative amount rounded to a fixed number of fraction digits.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RoundedDecimal {
        pub integer: String,
        pub fraction: String,
    }

    impl RoundedDecimal {
        /// Rounds the shortest decimal that reads back as `amount.abs()` half away from zero.
        ///
        /// Rounding the decimal text rather than the scaled binary value matches what
        /// `Intl.NumberFormat` displays: `1.005` becomes `1.01`, `0.40499999999999997` becomes `0.40`.
        pub fn round_half_away(amount: f64, decimals: usize) -> Self {
            let shortest = amount.abs().to_string();
            let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

            let mut digits: Vec<u8> = integer.bytes().collect();
            let kept = fraction.len().min(decimals);
            digits.extend(fraction[..kept].bytes());
            digits.resize(integer.len() + decimals, b'0');

            if fraction.as_bytes().get(decimals).is_some_and(|&next| next >= b'5') {
                let mut i = digits.len();
                loop {
                    if i == 0 {
                        digits.insert(0, b'1');
                        break;
                    }
                    i -= 1;
                    if digits[i] == b'9' {
                        digits[i] = b'0';
                    } else {
                        digits[i] += 1;
                        break;
                    }
                }
            }

            let split = digits.len() - decimals;
            let fraction = digits.split_off(split);
            Self {
                integer: String::from_utf8_lossy(&digits).into_owned(),
                fraction: String::from_utf8_lossy(&fraction).into_owned(),
            }
        }

        pub fn is_zero(&self) -> bool {
            self.integer.bytes().chain(self.fraction.bytes()).all(|b| b == b'0')
        }

        /// `integer<decimal_sep>fraction` with grouped thousands.
        pub fn render(&self, thousand_sep: &str, decimal_sep: &str) -> String {
            let integer = group_thousands(&self.integer, thousand_sep);
            if self.fraction.is_empty() {
                return integer;
            }
            format!("{}{}{}", integer, decimal_sep, self.fraction)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_decimal_simple() {
            assert_eq!(parse_decimal("123,45").unwrap(), 123.45);
        }

        #[test]
        fn test_parse_decimal_with_thousands() {
            assert_eq!(parse_decimal("1.234,56").unwrap(), 1234.56);
        }

        #[test]
        fn test_parse_decimal_large_number() {
            assert_eq!(parse_decimal("600.822.115,84").unwrap(), 600822115.84);
        }

        #[test]
        fn test_parse_decimal_invalid() {
            assert!(parse_decimal("abc").is_err());
            assert!(parse_decimal("12,3,4").is_err());
        }

        #[test]
        fn test_group_thousands() {
            assert_eq!(group_thousands("0", "."), "0");
            assert_eq!(group_thousands("999", "."), "999");
            assert_eq!(group_thousands("1000", "."), "1.000");
            assert_eq!(group_thousands("1234567", "."), "1.234.567");
            assert_eq!(group_thousands("123456", " "), "123 456");
        }

        fn render(amount: f64, decimals: usize) -> String {
            RoundedDecimal::round_half_away(amount, decimals).render(THOUSAND_SEPARATOR, DECIMAL_SEPARATOR)
        }

        #[test]
        fn test_round_pads_short_fractions() {
            assert_eq!(render(0.0, 2), "0,00");
            assert_eq!(render(0.05, 2), "0,05");
            assert_eq!(render(1234.5, 2), "1.234,50");
            assert_eq!(render(1500.0, 0), "1.500");
        }

        #[test]
        fn test_round_ties_on_shortest_decimal() {
            assert_eq!(render(1.005, 2), "1,01");
            assert_eq!(render(0.285, 2), "0,29");
            assert_eq!(render(152.795, 2), "152,80");
            assert_eq!(render(0.125, 2), "0,13");
        }

        #[test]
        fn test_round_below_tie_stays_down() {
            assert_eq!(render(0.40499999999999997, 2), "0,40");
            assert_eq!(render(1234567.891, 2), "1.234.567,89");
            assert_eq!(render(2.4, 0), "2");
        }

        #[test]
        fn test_round_carries_into_integer() {
            assert_eq!(render(99.999, 2), "100,00");
            assert_eq!(render(999.995, 2), "1.000,00");
            assert_eq!(render(9.5, 0), "10");
        }

        #[test]
        fn test_round_very_large_amount() {
            assert_eq!(render(1e20, 2), "100.000.000.000.000.000.000,00");
        }

        #[test]
        fn test_is_zero() {
            assert!(RoundedDecimal::round_half_away(0.004, 2).is_zero());
            assert!(RoundedDecimal::round_half_away(-0.0, 2).is_zero());
            assert!(!RoundedDecimal::round_half_away(0.005, 2).is_zero());
        }
    }
}
