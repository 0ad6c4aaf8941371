// Data pipeline: file ingestion into canonical records, then aggregation

pub mod ingestion;
pub mod processing;
