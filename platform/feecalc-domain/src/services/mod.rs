pub mod aggregation;
pub mod fees;
pub mod normalizer;
