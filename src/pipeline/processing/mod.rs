// Aggregation over canonical records: ordering, grouping, derived values

pub mod aggregate;
