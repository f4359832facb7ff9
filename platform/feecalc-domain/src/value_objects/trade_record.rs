use chrono::NaiveDate;

/// One ledger row as read from input.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub trade_id: String,
    pub trade_date: NaiveDate,
    pub instrument: String,
    /// Kept verbatim; unknown labels are legal and count as outgoing.
    pub side: String,
    pub notional: f64,
    pub fee_rate: f64,
    pub fee_rate_type: String,
}
