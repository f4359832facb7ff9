use crate::value_objects::trade_record::TradeRecord;
use std::path::Path;

pub trait TradeLedgerReader {
    fn exists(&self, path: &Path) -> bool;
    fn read_trades(&self, path: &Path) -> Result<Vec<TradeRecord>, String>;
}
