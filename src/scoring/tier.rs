/// Banding of a 0-100 score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Avoid,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::Excellent
        } else if score >= 60.0 {
            ScoreTier::Good
        } else {
            ScoreTier::Avoid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent choice",
            ScoreTier::Good => "Good choice",
            ScoreTier::Avoid => "Avoid",
        }
    }
}
