// Currency formatting with a fixed symbol, grouping and decimal convention.
use crate::config::settings::CurrencySettings;
use crate::error::EngineError;
use shared::utils::brazilian_format::RoundedDecimal;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    settings: CurrencySettings,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::brl()
    }
}

impl CurrencyFormatter {
    pub fn new(settings: CurrencySettings) -> Result<Self, EngineError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Brazilian real, `R$ 1.234,56`.
    pub fn brl() -> Self {
        Self { settings: CurrencySettings::default() }
    }

    pub fn settings(&self) -> &CurrencySettings {
        &self.settings
    }

    /// Formats `amount`, rounding its shortest decimal form half away from zero
    /// to the configured number of fraction digits. Non-finite amounts render as zero.
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() {
            amount
        } else {
            warn!("Cannot format non-finite amount {}, rendering zero", amount);
            0.0
        };

        let s = &self.settings;
        let rounded = RoundedDecimal::round_half_away(amount, s.fraction_digits);
        let body = rounded.render(&s.thousand_separator, &s.decimal_separator);

        let sign = if amount < 0.0 && !rounded.is_zero() { "-" } else { "" };
        format!("{}{}{}{}", sign, s.symbol, s.symbol_separator, body)
    }
}
