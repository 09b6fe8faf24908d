use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Defines how car scores are calculated. Every key is optional; missing keys
/// fall back to the built-in weights (30/25/20/15/10) and bonuses.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     budget: 30
///     consumption: 25
///     reliability: 20
///     safety: 15
///     comfort: 10
///   bonuses:
///     fuel_match: 5
///     family_fit: 3
///     priority: 5
///     ecology: 8
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight of each base dimension
    #[serde(default)]
    pub weights: Option<WeightsConfig>,

    /// Flat points added on top of the weighted dimensions
    #[serde(default)]
    pub bonuses: Option<BonusConfig>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = Weights::default();
        Self {
            weights: Some(WeightsConfig {
                budget: Some(weights.budget),
                consumption: Some(weights.consumption),
                reliability: Some(weights.reliability),
                safety: Some(weights.safety),
                comfort: Some(weights.comfort),
            }),
            bonuses: Some(BonusConfig {
                fuel_match: Some(weights.fuel_match_bonus),
                family_fit: Some(weights.family_fit_bonus),
                priority: Some(weights.priority_bonus),
                ecology: Some(weights.ecology_bonus),
            }),
        }
    }
}

impl ScoringConfig {
    /// Resolve the configured values, filling gaps with the built-in defaults.
    pub fn resolve(&self) -> Weights {
        let defaults = Weights::default();
        let w = self.weights.clone().unwrap_or_default();
        let b = self.bonuses.clone().unwrap_or_default();
        Weights {
            budget: w.budget.unwrap_or(defaults.budget),
            consumption: w.consumption.unwrap_or(defaults.consumption),
            reliability: w.reliability.unwrap_or(defaults.reliability),
            safety: w.safety.unwrap_or(defaults.safety),
            comfort: w.comfort.unwrap_or(defaults.comfort),
            fuel_match_bonus: b.fuel_match.unwrap_or(defaults.fuel_match_bonus),
            family_fit_bonus: b.family_fit.unwrap_or(defaults.family_fit_bonus),
            priority_bonus: b.priority.unwrap_or(defaults.priority_bonus),
            ecology_bonus: b.ecology.unwrap_or(defaults.ecology_bonus),
        }
    }
}

/// Per-dimension weights as written in the config file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WeightsConfig {
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub consumption: Option<f64>,
    #[serde(default)]
    pub reliability: Option<f64>,
    #[serde(default)]
    pub safety: Option<f64>,
    #[serde(default)]
    pub comfort: Option<f64>,
}

/// Bonus points as written in the config file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BonusConfig {
    /// Car fuel type equals the preferred one
    #[serde(default)]
    pub fuel_match: Option<f64>,
    /// Car seats the whole family
    #[serde(default)]
    pub family_fit: Option<f64>,
    /// Économie, Performance and Confort priority bonuses
    #[serde(default)]
    pub priority: Option<f64>,
    /// Écologie priority bonus
    #[serde(default)]
    pub ecology: Option<f64>,
}

/// Fully resolved weights and bonuses used by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub budget: f64,
    pub consumption: f64,
    pub reliability: f64,
    pub safety: f64,
    pub comfort: f64,
    pub fuel_match_bonus: f64,
    pub family_fit_bonus: f64,
    pub priority_bonus: f64,
    pub ecology_bonus: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            budget: 30.0,
            consumption: 25.0,
            reliability: 20.0,
            safety: 15.0,
            comfort: 10.0,
            fuel_match_bonus: 5.0,
            family_fit_bonus: 3.0,
            priority_bonus: 5.0,
            ecology_bonus: 8.0,
        }
    }
}

impl Weights {
    /// Sum of the five dimension weights (the normalization denominator)
    pub fn total(&self) -> f64 {
        self.budget + self.consumption + self.reliability + self.safety + self.comfort
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_100() {
        assert_eq!(Weights::default().total(), 100.0);
    }

    #[test]
    fn test_default_config_resolves_to_default_weights() {
        assert_eq!(ScoringConfig::default().resolve(), Weights::default());
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
weights:
  budget: 50
bonuses:
  ecology: 0
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        let weights = config.resolve();
        assert_eq!(weights.budget, 50.0);
        assert_eq!(weights.consumption, 25.0);
        assert_eq!(weights.ecology_bonus, 0.0);
        assert_eq!(weights.fuel_match_bonus, 5.0);
        assert_eq!(weights.total(), 120.0);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.weights.is_none());
        assert!(config.bonuses.is_none());
        assert_eq!(config.resolve(), Weights::default());
    }

    #[test]
    fn test_unknown_weight_rejected() {
        let yaml = r#"
weights:
  speed: 10
"#;
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
