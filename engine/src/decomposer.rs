//! Splits a final sale price into material cost, labor cost and profit.
//!
//! The model is `price = x + 0.6x + 3x = 4.6x`, where `x` is the material cost.
//! Profit is taken as whatever remains after material and labor so the three
//! parts always add back up to the price.
use crate::error::EngineError;
use shared::models::DecompositionResult;
use shared::utils::brazilian_format;
use tracing::debug;

/// Labor as a fraction of material cost.
pub const LABOR_RATIO: f64 = 0.6;
/// Profit as a multiple of material cost.
pub const PROFIT_RATIO: f64 = 3.0;
/// `1 + LABOR_RATIO + PROFIT_RATIO`.
pub const MATERIAL_DIVISOR: f64 = 4.6;

/// Reads a price typed by the user.
///
/// Text containing a comma is read in Brazilian notation (`1.234,56`); anything
/// else is read as a plain decimal (`460.5`, `1e3`).
pub fn parse_price(raw: &str) -> Result<f64, EngineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let parsed = if trimmed.contains(',') {
        brazilian_format::parse_decimal(trimmed).ok()
    } else {
        trimmed.parse::<f64>().ok()
    };
    let price = parsed.ok_or_else(|| EngineError::NotANumber(trimmed.to_string()))?;

    validate_price(price)
}

fn validate_price(price: f64) -> Result<f64, EngineError> {
    if !price.is_finite() {
        return Err(EngineError::NonFinite);
    }
    if price <= 0.0 {
        return Err(EngineError::NonPositive(price));
    }
    Ok(price)
}

/// Validates `price` and splits it, returning the `EngineError` instead of the zero state.
pub fn decompose_price(price: f64) -> Result<DecompositionResult, EngineError> {
    let price = validate_price(price)?;

    let material_cost = price / MATERIAL_DIVISOR;
    let labor_cost = LABOR_RATIO * material_cost;
    let profit = price - material_cost - labor_cost;

    Ok(DecompositionResult { material_cost, labor_cost, profit })
}

/// Decomposes raw user input. Invalid input yields the all-zero result.
pub fn decompose(raw: &str) -> DecompositionResult {
    parse_price(raw)
        .and_then(decompose_price)
        .unwrap_or_else(zero_state)
}

/// Numeric counterpart of [`decompose`], with the same zero-state policy.
pub fn decompose_value(price: f64) -> DecompositionResult {
    decompose_price(price).unwrap_or_else(zero_state)
}

fn zero_state(err: EngineError) -> DecompositionResult {
    debug!("Price rejected, showing zero state: {}", err);
    DecompositionResult::zero()
}
