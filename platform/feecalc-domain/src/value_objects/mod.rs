pub mod enriched_trade;
pub mod fee_direction;
pub mod fee_rate_type;
pub mod report_format;
pub mod trade_record;
pub mod trade_side;
