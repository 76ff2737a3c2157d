// Currency display settings. The GUI embeds these in its default configuration;
// `Default` is the Brazilian real convention used when nothing else is given.
use crate::error::EngineError;
use serde::Deserialize;
use shared::utils::brazilian_format;

/// Upper bound for `fraction_digits`.
pub const MAX_FRACTION_DIGITS: usize = 6;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CurrencySettings {
    pub locale: String,
    pub currency_code: String,
    pub symbol: String,
    /// Placed between the symbol and the amount. `Intl` uses a no-break space for pt-BR.
    pub symbol_separator: String,
    pub thousand_separator: String,
    pub decimal_separator: String,
    pub fraction_digits: usize,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            locale: "pt-BR".to_string(),
            currency_code: "BRL".to_string(),
            symbol: "R$".to_string(),
            symbol_separator: "\u{a0}".to_string(),
            thousand_separator: brazilian_format::THOUSAND_SEPARATOR.to_string(),
            decimal_separator: brazilian_format::DECIMAL_SEPARATOR.to_string(),
            fraction_digits: 2,
        }
    }
}

impl CurrencySettings {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.symbol.trim().is_empty() {
            return Err(EngineError::ConfigError("currency symbol must not be empty".to_string()));
        }
        if self.thousand_separator.is_empty() || self.decimal_separator.is_empty() {
            return Err(EngineError::ConfigError("separators must not be empty".to_string()));
        }
        if self.thousand_separator == self.decimal_separator {
            return Err(EngineError::ConfigError(format!(
                "thousand and decimal separators are both '{}'",
                self.decimal_separator
            )));
        }
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(EngineError::ConfigError(format!(
                "fraction_digits {} exceeds maximum of {}",
                self.fraction_digits, MAX_FRACTION_DIGITS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_brl() {
        let settings = CurrencySettings::default();
        assert_eq!(settings.currency_code, "BRL");
        assert_eq!(settings.symbol, "R$");
        assert_eq!(settings.fraction_digits, 2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings: CurrencySettings = serde_json::from_str(r#"{ "symbol": "US$" }"#).unwrap();
        assert_eq!(settings.symbol, "US$");
        assert_eq!(settings.decimal_separator, ",");
        assert_eq!(settings.locale, "pt-BR");
    }

    #[test]
    fn test_rejects_identical_separators() {
        let settings = CurrencySettings { thousand_separator: ",".to_string(), ..Default::default() };
        assert!(matches!(settings.validate(), Err(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_empty_symbol() {
        let settings = CurrencySettings { symbol: " ".to_string(), ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_too_many_fraction_digits() {
        let settings = CurrencySettings { fraction_digits: 7, ..Default::default() };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("fraction_digits 7"));
        assert!(!err.is_invalid_price());
    }
}
