pub mod aggregator;

pub use aggregator::{compare, criteria_checks, winner_by, ComparisonSummary, CriteriaCheck, Direction};
