use std::collections::HashMap;

use super::config::Weights;
use super::criteria::ComparisonCriteria;
use super::factors::{Bonus, Dimension};
use crate::catalog::Car;
use crate::error::{EngineError, Result};

/// Upper bound of the final score
pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DimensionContribution {
    pub dimension: Dimension,
    pub sub_score: f64,    // 0-100 scale, may exceed 100 for budget/consumption
    pub weight: f64,
    pub contribution: f64, // sub_score * weight / 100
}

#[derive(Debug, Clone, PartialEq)]
pub struct BonusContribution {
    pub bonus: Bonus,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub dimensions: Vec<DimensionContribution>,
    pub bonuses: Vec<BonusContribution>,
    pub total: f64,     // weighted contributions plus bonuses
    pub max_total: f64, // sum of the dimension weights
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Final score clamped to [0, 100]
    pub score: f64,
    /// `total / max_total * 100` before clamping
    pub raw: f64,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    /// True when bonuses pushed the raw score past the ceiling
    pub fn capped(&self) -> bool {
        self.raw > MAX_SCORE
    }
}

/// Score one car against one criteria set with the built-in weights.
pub fn compute_score(car: &Car, criteria: &ComparisonCriteria) -> Result<f64> {
    calculate_score(car, criteria, &Weights::default()).map(|result| result.score)
}

/// Score one car against one criteria set.
///
/// Weighted sum of the five dimensions plus flat bonuses, normalized by the
/// sum of the weights and clamped to [0, 100]. Fails before any arithmetic
/// when the criteria are invalid or the weights sum to zero.
pub fn calculate_score(
    car: &Car,
    criteria: &ComparisonCriteria,
    weights: &Weights,
) -> Result<ScoreResult> {
    criteria.validate()?;

    let max_total = weights.total();
    if !max_total.is_finite() || max_total <= 0.0 {
        return Err(EngineError::InvalidWeights(format!(
            "dimension weights must sum to a positive number, got {}",
            max_total
        )));
    }

    let mut total = 0.0;

    let dimensions: Vec<DimensionContribution> = Dimension::ALL
        .iter()
        .map(|dimension| {
            let sub_score = dimension.sub_score(car, criteria);
            let weight = dimension.weight(weights);
            let contribution = sub_score * weight / 100.0;
            total += contribution;
            DimensionContribution {
                dimension: *dimension,
                sub_score,
                weight,
                contribution,
            }
        })
        .collect();

    let bonuses: Vec<BonusContribution> = Bonus::for_criteria(criteria)
        .into_iter()
        .filter_map(|bonus| {
            bonus
                .points(car, criteria, weights)
                .map(|points| BonusContribution { bonus, points })
        })
        .collect();
    total += bonuses.iter().map(|b| b.points).sum::<f64>();

    let raw = total / max_total * 100.0;

    // Floor at zero as well as capping at 100
    Ok(ScoreResult {
        score: raw.clamp(0.0, MAX_SCORE),
        raw,
        breakdown: ScoreBreakdown {
            dimensions,
            bonuses,
            total,
            max_total,
        },
    })
}

/// Score every car, keyed by car id.
pub fn score_cars(
    cars: &[Car],
    criteria: &ComparisonCriteria,
    weights: &Weights,
) -> Result<HashMap<String, ScoreResult>> {
    criteria.validate()?;
    let scores = cars
        .iter()
        .map(|car| Ok((car.id.clone(), calculate_score(car, criteria, weights)?)))
        .collect::<Result<HashMap<_, _>>>()?;
    tracing::debug!(cars = cars.len(), "scored cars");
    Ok(scores)
}

/// Reduce full results to the plain score mapping the aggregator takes.
pub fn score_map(results: &HashMap<String, ScoreResult>) -> HashMap<String, f64> {
    results
        .iter()
        .map(|(id, result)| (id.clone(), result.score))
        .collect()
}
