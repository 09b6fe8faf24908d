use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::types::fold;
use crate::catalog::FuelType;
use crate::error::{EngineError, Result};

/// Main driving context. Recorded with the criteria; it does not change the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Usage {
    Ville,
    Route,
    #[default]
    Mixte,
}

impl Usage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Usage::Ville => "Ville",
            Usage::Route => "Route",
            Usage::Mixte => "Mixte",
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Usage {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match fold(s).as_str() {
            "ville" | "city" => Ok(Usage::Ville),
            "route" | "highway" => Ok(Usage::Route),
            "mixte" | "mixed" => Ok(Usage::Mixte),
            _ => Err(EngineError::UnknownEnumValue {
                kind: "usage",
                value: s.to_string(),
                expected: "Ville, Route, Mixte",
            }),
        }
    }
}

/// What the user cares about most. Selects exactly one priority bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Priority {
    #[default]
    #[serde(rename = "Économie")]
    Economie,
    Performance,
    Confort,
    #[serde(rename = "Écologie")]
    Ecologie,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Economie => "Économie",
            Priority::Performance => "Performance",
            Priority::Confort => "Confort",
            Priority::Ecologie => "Écologie",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match fold(s).as_str() {
            "economie" | "economy" => Ok(Priority::Economie),
            "performance" => Ok(Priority::Performance),
            "confort" | "comfort" => Ok(Priority::Confort),
            "ecologie" | "ecology" => Ok(Priority::Ecologie),
            _ => Err(EngineError::UnknownEnumValue {
                kind: "priority",
                value: s.to_string(),
                expected: "Économie, Performance, Confort, Écologie",
            }),
        }
    }
}

/// The user's preferences for one comparison session.
///
/// Example YAML (every key optional, missing keys take the defaults):
/// ```yaml
/// criteria:
///   budget: 30000
///   fuelPreference: "Électrique"
///   usage: "Ville"
///   priority: "Écologie"
///   familySize: 5
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ComparisonCriteria {
    /// Budget in euros. Must be positive.
    pub budget: f64,
    /// None means no preference
    pub fuel_preference: Option<FuelType>,
    pub usage: Usage,
    pub priority: Priority,
    /// Seats needed. Must be at least 1.
    pub family_size: u32,
}

impl Default for ComparisonCriteria {
    fn default() -> Self {
        Self {
            budget: 50_000.0,
            fuel_preference: None,
            usage: Usage::Mixte,
            priority: Priority::Economie,
            family_size: 4,
        }
    }
}

impl ComparisonCriteria {
    /// Reject criteria the score formula cannot handle.
    ///
    /// The budget is a denominator, so it has to be a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(EngineError::InvalidCriteria(format!(
                "budget must be a positive amount, got {}",
                self.budget
            )));
        }
        if self.family_size == 0 {
            return Err(EngineError::InvalidCriteria(
                "family size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of fields that differ from the defaults
    pub fn active_count(&self) -> usize {
        let defaults = Self::default();
        [
            self.budget != defaults.budget,
            self.fuel_preference != defaults.fuel_preference,
            self.usage != defaults.usage,
            self.priority != defaults.priority,
            self.family_size != defaults.family_size,
        ]
        .into_iter()
        .filter(|changed| *changed)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria() {
        let criteria = ComparisonCriteria::default();
        assert_eq!(criteria.budget, 50_000.0);
        assert!(criteria.fuel_preference.is_none());
        assert_eq!(criteria.usage, Usage::Mixte);
        assert_eq!(criteria.priority, Priority::Economie);
        assert_eq!(criteria.family_size, 4);
        assert!(criteria.validate().is_ok());
        assert_eq!(criteria.active_count(), 0);
    }

    #[test]
    fn test_zero_budget_rejected() {
        let criteria = ComparisonCriteria {
            budget: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            criteria.validate(),
            Err(EngineError::InvalidCriteria(_))
        ));
    }

    #[test]
    fn test_negative_and_nan_budget_rejected() {
        for budget in [-1.0, f64::NAN, f64::INFINITY] {
            let criteria = ComparisonCriteria {
                budget,
                ..Default::default()
            };
            assert!(criteria.validate().is_err(), "budget {} accepted", budget);
        }
    }

    #[test]
    fn test_zero_family_size_rejected() {
        let criteria = ComparisonCriteria {
            family_size: 0,
            ..Default::default()
        };
        let err = criteria.validate().unwrap_err();
        assert!(err.to_string().contains("family size"));
    }

    #[test]
    fn test_active_count() {
        let criteria = ComparisonCriteria {
            budget: 30_000.0,
            fuel_preference: Some(FuelType::Hybride),
            ..Default::default()
        };
        assert_eq!(criteria.active_count(), 2);
    }

    #[test]
    fn test_partial_criteria_parse() {
        let yaml = r#"
budget: 25000
priority: "Écologie"
familySize: 5
"#;
        let criteria: ComparisonCriteria = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(criteria.budget, 25_000.0);
        assert_eq!(criteria.priority, Priority::Ecologie);
        assert_eq!(criteria.family_size, 5);
        assert_eq!(criteria.usage, Usage::Mixte);
        assert!(criteria.fuel_preference.is_none());
    }

    #[test]
    fn test_criteria_with_fuel_preference_parse() {
        let yaml = r#"fuelPreference: "Électrique""#;
        let criteria: ComparisonCriteria = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(criteria.fuel_preference, Some(FuelType::Electrique));
    }

    #[test]
    fn test_priority_and_usage_parse() {
        assert_eq!("économie".parse::<Priority>().unwrap(), Priority::Economie);
        assert_eq!("Ecologie".parse::<Priority>().unwrap(), Priority::Ecologie);
        assert_eq!("comfort".parse::<Priority>().unwrap(), Priority::Confort);
        assert_eq!("ville".parse::<Usage>().unwrap(), Usage::Ville);

        let err = "speed".parse::<Priority>().unwrap_err();
        assert!(err.to_string().contains("Unknown priority 'speed'"));
        assert!("offroad".parse::<Usage>().is_err());
    }
}
