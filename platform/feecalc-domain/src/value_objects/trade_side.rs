use serde::{Deserialize, Serialize};

/// Side that can be configured as the "incoming" fee side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum TradeSide {
    Buy,
    #[default]
    Sell,
}

impl TradeSide {
    /// Label compared verbatim against a ledger row's `Side`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}
