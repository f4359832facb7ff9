use crate::services::normalizer::normalize_fee_rate;
use crate::value_objects::enriched_trade::EnrichedTrade;
use crate::value_objects::fee_direction::FeeDirection;
use crate::value_objects::trade_record::TradeRecord;
use crate::value_objects::trade_side::TradeSide;

/// Exact, case-sensitive match on the side label; everything else is outgoing.
pub fn classify_direction(side: &str, incoming_side: TradeSide) -> FeeDirection {
    if side == incoming_side.label() {
        FeeDirection::Incoming
    } else {
        FeeDirection::Outgoing
    }
}

pub fn enrich(record: TradeRecord, incoming_side: TradeSide) -> EnrichedTrade {
    let fee_decimal = normalize_fee_rate(record.fee_rate, &record.fee_rate_type);
    let fee_amount = record.notional * fee_decimal;
    let fee_direction = classify_direction(&record.side, incoming_side);
    EnrichedTrade {
        record,
        fee_decimal,
        fee_amount,
        fee_direction,
    }
}

pub fn compute_fees(records: Vec<TradeRecord>, incoming_side: TradeSide) -> Vec<EnrichedTrade> {
    records
        .into_iter()
        .map(|record| enrich(record, incoming_side))
        .collect()
}
