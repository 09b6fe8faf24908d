pub mod config;
pub mod criteria;
pub mod engine;
pub mod factors;
pub mod tier;
pub mod validation;

pub use config::*;
pub use criteria::{ComparisonCriteria, Priority, Usage};
pub use engine::{calculate_score, compute_score, score_cars, score_map, ScoreBreakdown, ScoreResult};
pub use factors::{Bonus, Dimension};
pub use tier::ScoreTier;
pub use validation::validate_scoring;
