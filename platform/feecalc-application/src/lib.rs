pub mod config;
pub mod fee_report;
pub mod meta;
pub mod settings;
