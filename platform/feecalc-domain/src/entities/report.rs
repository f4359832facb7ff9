use crate::value_objects::enriched_trade::EnrichedTrade;
use serde::Serialize;

pub const METRIC_TOTAL_INCOMING: &str = "Total Incoming Fees";
pub const METRIC_TOTAL_OUTGOING: &str = "Total Outgoing Fees";
pub const METRIC_NET: &str = "Net Fees (Incoming - Outgoing)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeeSummary {
    pub total_incoming: f64,
    pub total_outgoing: f64,
    pub net: f64,
}

impl FeeSummary {
    pub fn new(total_incoming: f64, total_outgoing: f64) -> Self {
        Self {
            total_incoming,
            total_outgoing,
            net: total_incoming - total_outgoing,
        }
    }

    /// `(Metric, Amount)` rows in report order.
    pub fn metric_rows(&self) -> [(&'static str, f64); 3] {
        [
            (METRIC_TOTAL_INCOMING, self.total_incoming),
            (METRIC_TOTAL_OUTGOING, self.total_outgoing),
            (METRIC_NET, self.net),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentBreakdown {
    pub instrument: String,
    pub trades: usize,
    pub total_notional: f64,
    pub total_fees: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeeReport {
    pub trades: Vec<EnrichedTrade>,
    pub summary: FeeSummary,
    pub by_instrument: Vec<InstrumentBreakdown>,
}

impl FeeReport {
    pub fn summary_json(&self) -> serde_json::Value {
        serde_json::json!({
            "trades": self.trades.len(),
            "summary": self.summary,
            "by_instrument": self.by_instrument,
        })
    }
}
