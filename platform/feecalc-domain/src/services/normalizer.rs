use crate::value_objects::fee_rate_type::FeeRateType;

/// Converts a row's `FeeRate` into the decimal fraction applied to `Notional`.
pub fn normalize_fee_rate(rate: f64, rate_type: &str) -> f64 {
    rate / FeeRateType::parse(rate_type).divisor()
}
