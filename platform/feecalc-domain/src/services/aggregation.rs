use crate::entities::report::{FeeReport, FeeSummary, InstrumentBreakdown};
use crate::services::fees::compute_fees;
use crate::value_objects::enriched_trade::EnrichedTrade;
use crate::value_objects::fee_direction::FeeDirection;
use crate::value_objects::trade_record::TradeRecord;
use crate::value_objects::trade_side::TradeSide;
use std::collections::HashMap;

pub fn summarize(trades: &[EnrichedTrade]) -> FeeSummary {
    let mut incoming = 0.0;
    let mut outgoing = 0.0;
    for trade in trades {
        match trade.fee_direction {
            FeeDirection::Incoming => incoming += trade.fee_amount,
            FeeDirection::Outgoing => outgoing += trade.fee_amount,
        }
    }
    FeeSummary::new(incoming, outgoing)
}

/// Groups by instrument and orders by descending total fees. Ties keep the
/// order in which instruments were first seen.
pub fn per_instrument(trades: &[EnrichedTrade]) -> Vec<InstrumentBreakdown> {
    let mut index_by_instrument: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<InstrumentBreakdown> = Vec::new();

    for trade in trades {
        let instrument = trade.record.instrument.as_str();
        let idx = *index_by_instrument.entry(instrument).or_insert_with(|| {
            groups.push(InstrumentBreakdown {
                instrument: instrument.to_string(),
                trades: 0,
                total_notional: 0.0,
                total_fees: 0.0,
            });
            groups.len() - 1
        });
        let group = &mut groups[idx];
        group.trades += 1;
        group.total_notional += trade.record.notional;
        group.total_fees += trade.fee_amount;
    }

    groups.sort_by(|a, b| b.total_fees.total_cmp(&a.total_fees));
    groups
}

pub fn build_report(records: Vec<TradeRecord>, incoming_side: TradeSide) -> FeeReport {
    let trades = compute_fees(records, incoming_side);
    let summary = summarize(&trades);
    let by_instrument = per_instrument(&trades);
    FeeReport {
        trades,
        summary,
        by_instrument,
    }
}
