use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Price input is empty")]
    EmptyInput,

    #[error("Price input is not a number: '{0}'")]
    NotANumber(String),

    #[error("Price is not a finite number")]
    NonFinite,

    #[error("Price must be greater than zero, got {0}")]
    NonPositive(f64),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl EngineError {
    /// True for the errors produced while validating a price, as opposed to setup errors.
    pub fn is_invalid_price(&self) -> bool {
        !matches!(self, EngineError::ConfigError(_))
    }
}
