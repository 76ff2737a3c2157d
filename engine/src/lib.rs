// Engine library root: the price formula, currency formatting and their settings.

pub mod config;
pub mod decomposer;
pub mod error;
pub mod formatter;

pub use decomposer::{decompose, decompose_value};
pub use error::EngineError;
pub use formatter::CurrencyFormatter;
