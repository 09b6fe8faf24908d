use std::collections::HashMap;

use crate::catalog::Car;
use crate::error::{EngineError, Result};
use crate::scoring::ComparisonCriteria;

/// Which end of a numeric field wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    fn is_better(&self, candidate: f64, current: f64) -> bool {
        match self {
            Direction::HigherIsBetter => candidate > current,
            Direction::LowerIsBetter => candidate < current,
        }
    }
}

/// Winners and extremes of a comparison set.
#[derive(Debug, Clone)]
pub struct ComparisonSummary<'a> {
    pub best: &'a Car,
    pub worst: &'a Car,
    pub price_winner: &'a Car,
    pub consumption_winner: &'a Car,
    pub power_winner: &'a Car,
    pub reliability_winner: &'a Car,
}

/// Whether one car satisfies the user's hard requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaCheck {
    pub car_id: String,
    pub within_budget: bool,
    pub enough_seats: bool,
}

/// Pick the car whose selected field is strictly better than every earlier
/// one. Ties keep the earlier car. Returns None for an empty slice.
pub fn winner_by<F>(cars: &[Car], selector: F, direction: Direction) -> Option<&Car>
where
    F: Fn(&Car) -> f64,
{
    let mut iter = cars.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |winner, car| {
        if direction.is_better(selector(car), selector(winner)) {
            car
        } else {
            winner
        }
    }))
}

/// Summarize a comparison set: best and worst car by score plus the
/// per-criterion winners.
///
/// # Errors
///
/// - `EmptyComparisonSet` if `cars` is empty
/// - `MissingScore` if any car has no entry in `scores`
pub fn compare<'a>(cars: &'a [Car], scores: &HashMap<String, f64>) -> Result<ComparisonSummary<'a>> {
    if cars.is_empty() {
        return Err(EngineError::EmptyComparisonSet);
    }

    if let Some(car) = cars.iter().find(|car| !scores.contains_key(&car.id)) {
        return Err(EngineError::MissingScore(car.id.clone()));
    }

    let score_of = |car: &Car| scores[&car.id];
    let pick = |winner: Option<&'a Car>| winner.ok_or(EngineError::EmptyComparisonSet);

    let summary = ComparisonSummary {
        best: pick(winner_by(cars, score_of, Direction::HigherIsBetter))?,
        worst: pick(winner_by(cars, score_of, Direction::LowerIsBetter))?,
        price_winner: pick(winner_by(cars, |car| car.price, Direction::LowerIsBetter))?,
        consumption_winner: pick(winner_by(cars, |car| car.consumption, Direction::LowerIsBetter))?,
        power_winner: pick(winner_by(cars, |car| car.power, Direction::HigherIsBetter))?,
        reliability_winner: pick(winner_by(cars, |car| car.reliability, Direction::HigherIsBetter))?,
    };

    tracing::debug!(
        cars = cars.len(),
        best = %summary.best.id,
        worst = %summary.worst.id,
        "compared cars"
    );
    Ok(summary)
}

/// Budget and seating checks for each car, in input order.
pub fn criteria_checks(cars: &[Car], criteria: &ComparisonCriteria) -> Vec<CriteriaCheck> {
    cars.iter()
        .map(|car| CriteriaCheck {
            car_id: car.id.clone(),
            within_budget: car.price <= criteria.budget,
            enough_seats: car.seats >= criteria.family_size,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, FuelType};

    fn car(id: &str, price: f64, consumption: f64, power: f64, reliability: f64) -> Car {
        Car {
            id: id.to_string(),
            brand: "Brand".to_string(),
            model: id.to_uppercase(),
            year: 2024,
            category: Category::Berline,
            fuel_type: FuelType::Essence,
            image: None,
            features: vec![],
            pros: vec![],
            cons: vec![],
            price,
            consumption,
            power,
            seats: 5,
            reliability,
            safety: 4.0,
            comfort: 4.0,
        }
    }

    fn scores(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(id, s)| (id.to_string(), *s)).collect()
    }

    #[test]
    fn test_compare_picks_each_winner() {
        let cars = vec![
            car("a", 30_000.0, 6.0, 120.0, 4.0),
            car("b", 25_000.0, 5.5, 180.0, 3.5),
            car("c", 40_000.0, 4.0, 150.0, 5.0),
        ];
        let summary = compare(&cars, &scores(&[("a", 70.0), ("b", 85.0), ("c", 60.0)])).unwrap();

        assert_eq!(summary.best.id, "b");
        assert_eq!(summary.worst.id, "c");
        assert_eq!(summary.price_winner.id, "b");
        assert_eq!(summary.consumption_winner.id, "c");
        assert_eq!(summary.power_winner.id, "b");
        assert_eq!(summary.reliability_winner.id, "c");
    }

    #[test]
    fn test_price_tie_keeps_first() {
        let cars = vec![
            car("a", 20_000.0, 6.0, 100.0, 4.0),
            car("b", 20_000.0, 6.0, 100.0, 4.0),
        ];
        let summary = compare(&cars, &scores(&[("a", 50.0), ("b", 50.0)])).unwrap();
        assert_eq!(summary.price_winner.id, "a");
        assert_eq!(summary.consumption_winner.id, "a");
        assert_eq!(summary.power_winner.id, "a");
        assert_eq!(summary.reliability_winner.id, "a");
    }

    #[test]
    fn test_score_ties_keep_first_for_best_and_worst() {
        let cars = vec![
            car("a", 20_000.0, 6.0, 100.0, 4.0),
            car("b", 21_000.0, 6.0, 100.0, 4.0),
            car("c", 22_000.0, 6.0, 100.0, 4.0),
        ];
        let summary = compare(&cars, &scores(&[("a", 40.0), ("b", 90.0), ("c", 90.0)])).unwrap();
        assert_eq!(summary.best.id, "b");

        let summary = compare(&cars, &scores(&[("a", 90.0), ("b", 40.0), ("c", 40.0)])).unwrap();
        assert_eq!(summary.worst.id, "b");
    }

    #[test]
    fn test_single_car_wins_everything() {
        let cars = vec![car("solo", 20_000.0, 6.0, 100.0, 4.0)];
        let summary = compare(&cars, &scores(&[("solo", 12.0)])).unwrap();
        assert_eq!(summary.best.id, "solo");
        assert_eq!(summary.worst.id, "solo");
        assert_eq!(summary.price_winner.id, "solo");
    }

    #[test]
    fn test_empty_set_rejected() {
        let result = compare(&[], &HashMap::new());
        assert!(matches!(result, Err(EngineError::EmptyComparisonSet)));
    }

    #[test]
    fn test_missing_score_rejected() {
        let cars = vec![
            car("a", 20_000.0, 6.0, 100.0, 4.0),
            car("b", 20_000.0, 6.0, 100.0, 4.0),
        ];
        let result = compare(&cars, &scores(&[("a", 50.0)]));
        assert_eq!(result.unwrap_err(), EngineError::MissingScore("b".to_string()));
    }

    #[test]
    fn test_winner_by_empty() {
        assert!(winner_by(&[], |c| c.price, Direction::LowerIsBetter).is_none());
    }

    #[test]
    fn test_winner_by_custom_field() {
        let mut cars = vec![
            car("a", 20_000.0, 6.0, 100.0, 4.0),
            car("b", 20_000.0, 6.0, 100.0, 4.0),
        ];
        cars[1].seats = 7;
        let winner = winner_by(&cars, |c| c.seats as f64, Direction::HigherIsBetter).unwrap();
        assert_eq!(winner.id, "b");
    }

    #[test]
    fn test_criteria_checks() {
        let mut cars = vec![
            car("cheap", 20_000.0, 6.0, 100.0, 4.0),
            car("exact", 30_000.0, 6.0, 100.0, 4.0),
            car("pricey", 30_001.0, 6.0, 100.0, 4.0),
        ];
        cars[0].seats = 4;
        let criteria = ComparisonCriteria {
            budget: 30_000.0,
            family_size: 5,
            ..Default::default()
        };

        let checks = criteria_checks(&cars, &criteria);
        assert_eq!(checks.len(), 3);
        assert!(checks[0].within_budget && !checks[0].enough_seats);
        assert!(checks[1].within_budget && checks[1].enough_seats);
        assert!(!checks[2].within_budget && checks[2].enough_seats);
    }
}
