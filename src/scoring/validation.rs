use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref weights) = config.weights {
        for (name, value) in [
            ("budget", weights.budget),
            ("consumption", weights.consumption),
            ("reliability", weights.reliability),
            ("safety", weights.safety),
            ("comfort", weights.comfort),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    errors.push(format!("scoring.weights.{}: must be non-negative, got {}", name, v));
                }
            }
        }
    }

    // Only meaningful once the individual weights are sane
    if errors.is_empty() && config.resolve().total() <= 0.0 {
        errors.push("scoring.weights: at least one weight must be positive".to_string());
    }

    if let Some(ref bonuses) = config.bonuses {
        for (name, value) in [
            ("fuel_match", bonuses.fuel_match),
            ("family_fit", bonuses.family_fit),
            ("priority", bonuses.priority),
            ("ecology", bonuses.ecology),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    errors.push(format!("scoring.bonuses.{}: must be a finite number", name));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
