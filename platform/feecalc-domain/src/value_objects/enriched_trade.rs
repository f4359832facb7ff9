use crate::value_objects::fee_direction::FeeDirection;
use crate::value_objects::trade_record::TradeRecord;

/// A ledger row plus the fields derived from it on every run.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTrade {
    pub record: TradeRecord,
    pub fee_decimal: f64,
    pub fee_amount: f64,
    pub fee_direction: FeeDirection,
}
