use super::config::Weights;
use super::criteria::{ComparisonCriteria, Priority};
use crate::catalog::{Car, FuelType};

/// Reference consumption for electric cars, in kWh/100km
pub const ELECTRIC_REFERENCE_CONSUMPTION: f64 = 20.0;
/// Reference consumption for combustion and hybrid cars, in L/100km
pub const FUEL_REFERENCE_CONSUMPTION: f64 = 7.0;

/// Ratings are given on a 0-5 scale
const RATING_SCALE: f64 = 5.0;

/// Cars under this consumption earn the Économie bonus
const ECONOMY_CONSUMPTION_THRESHOLD: f64 = 5.0;
/// Cars over this power (hp) earn the Performance bonus
const PERFORMANCE_POWER_THRESHOLD: f64 = 150.0;
/// Cars rated at least this comfortable earn the Confort bonus
const COMFORT_RATING_THRESHOLD: f64 = 4.0;

/// One of the five weighted base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Budget,
    Consumption,
    Reliability,
    Safety,
    Comfort,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Budget,
        Dimension::Consumption,
        Dimension::Reliability,
        Dimension::Safety,
        Dimension::Comfort,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Budget => "Budget fit",
            Dimension::Consumption => "Consumption",
            Dimension::Reliability => "Reliability",
            Dimension::Safety => "Safety",
            Dimension::Comfort => "Comfort",
        }
    }

    pub fn weight(&self, weights: &Weights) -> f64 {
        match self {
            Dimension::Budget => weights.budget,
            Dimension::Consumption => weights.consumption,
            Dimension::Reliability => weights.reliability,
            Dimension::Safety => weights.safety,
            Dimension::Comfort => weights.comfort,
        }
    }

    /// Sub-score on a 0-100 scale. Budget and consumption may exceed 100 for
    /// cars under budget or under the reference; both are floored at 0.
    /// Assumes `criteria.budget > 0`.
    pub fn sub_score(&self, car: &Car, criteria: &ComparisonCriteria) -> f64 {
        match self {
            Dimension::Budget => relative_score(car.price, criteria.budget),
            Dimension::Consumption => {
                relative_score(car.consumption, reference_consumption(car.fuel_type))
            }
            Dimension::Reliability => rating_score(car.reliability),
            Dimension::Safety => rating_score(car.safety),
            Dimension::Comfort => rating_score(car.comfort),
        }
    }
}

/// Reference consumption the car's figure is measured against
pub fn reference_consumption(fuel_type: FuelType) -> f64 {
    if fuel_type.is_electric() {
        ELECTRIC_REFERENCE_CONSUMPTION
    } else {
        FUEL_REFERENCE_CONSUMPTION
    }
}

/// 100 at the reference, minus one point per percent above it, floored at 0
fn relative_score(value: f64, reference: f64) -> f64 {
    (100.0 - ((value - reference) / reference) * 100.0).max(0.0)
}

fn rating_score(rating: f64) -> f64 {
    rating / RATING_SCALE * 100.0
}

/// A flat adjustment added after the weighted dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bonus {
    FuelMatch,
    FamilyFit,
    Priority(Priority),
}

impl Bonus {
    pub fn label(&self) -> String {
        match self {
            Bonus::FuelMatch => "Preferred fuel".to_string(),
            Bonus::FamilyFit => "Seats the family".to_string(),
            Bonus::Priority(priority) => format!("Priority: {}", priority),
        }
    }

    /// Points this bonus awards the car, or None when its condition fails.
    pub fn points(&self, car: &Car, criteria: &ComparisonCriteria, weights: &Weights) -> Option<f64> {
        let earned = match self {
            Bonus::FuelMatch => criteria.fuel_preference == Some(car.fuel_type),
            Bonus::FamilyFit => criteria.family_size <= car.seats,
            Bonus::Priority(priority) => priority_condition(*priority, car),
        };
        earned.then(|| match self {
            Bonus::FuelMatch => weights.fuel_match_bonus,
            Bonus::FamilyFit => weights.family_fit_bonus,
            Bonus::Priority(Priority::Ecologie) => weights.ecology_bonus,
            Bonus::Priority(_) => weights.priority_bonus,
        })
    }

    /// The bonuses that apply to a criteria set, in application order
    pub fn for_criteria(criteria: &ComparisonCriteria) -> [Bonus; 3] {
        [
            Bonus::FuelMatch,
            Bonus::FamilyFit,
            Bonus::Priority(criteria.priority),
        ]
    }
}

fn priority_condition(priority: Priority, car: &Car) -> bool {
    match priority {
        Priority::Economie => {
            car.consumption < ECONOMY_CONSUMPTION_THRESHOLD || car.fuel_type.is_electric()
        }
        Priority::Performance => car.power > PERFORMANCE_POWER_THRESHOLD,
        Priority::Confort => car.comfort >= COMFORT_RATING_THRESHOLD,
        Priority::Ecologie => matches!(car.fuel_type, FuelType::Electrique | FuelType::Hybride),
    }
}
