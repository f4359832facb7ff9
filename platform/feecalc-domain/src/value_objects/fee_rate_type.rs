/// Unit in which a ledger row expresses its `FeeRate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeRateType {
    /// Basis points, 1 bps = 0.0001.
    Bps,
    /// Percent, 0.1 means 0.1%.
    Pct,
    /// Already a decimal fraction.
    Decimal,
}

impl FeeRateType {
    /// Case-insensitive. Anything other than `bps` or `pct` (empty included)
    /// falls back to `Decimal`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "bps" => Self::Bps,
            "pct" => Self::Pct,
            _ => Self::Decimal,
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            Self::Bps => 10_000.0,
            Self::Pct => 100.0,
            Self::Decimal => 1.0,
        }
    }
}
