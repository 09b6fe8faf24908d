use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::types::Car;

/// Load a car catalog from a file.
///
/// `.json` files are parsed as a JSON array of cars; anything else is parsed
/// as YAML. The catalog is validated before being returned.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The content cannot be parsed
/// - Any car fails validation (all problems are reported together)
pub fn load_catalog(path: &Path) -> Result<Vec<Car>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file at {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let cars: Vec<Car> = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: invalid YAML in {}", path.display()))?
    };

    if let Err(errors) = validate_catalog(&cars) {
        anyhow::bail!(
            "Invalid catalog {}:\n  - {}",
            path.display(),
            errors.join("\n  - ")
        );
    }

    tracing::debug!(path = %path.display(), cars = cars.len(), "loaded catalog");
    Ok(cars)
}

/// Validate catalog records.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(cars: &[Car]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, car) in cars.iter().enumerate() {
        if car.id.trim().is_empty() {
            errors.push(format!("cars[{}].id: must not be empty", i));
        } else if !seen.insert(id_key(&car.id)) {
            errors.push(format!("cars[{}].id: duplicate id '{}'", i, car.id));
        }

        for (field, value) in [
            ("price", car.price),
            ("consumption", car.consumption),
            ("power", car.power),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("cars[{}].{}: must be non-negative", i, field));
            }
        }

        if car.seats == 0 {
            errors.push(format!("cars[{}].seats: must be at least 1", i));
        }

        for (field, value) in [
            ("reliability", car.reliability),
            ("safety", car.safety),
            ("comfort", car.comfort),
        ] {
            if !(0.0..=5.0).contains(&value) {
                errors.push(format!("cars[{}].{}: must be between 0 and 5", i, field));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Case folding shared by duplicate detection and lookup
fn id_key(id: &str) -> String {
    id.to_lowercase()
}

/// Find a car by id (case-insensitive)
pub fn find_car<'a>(cars: &'a [Car], id: &str) -> Option<&'a Car> {
    let key = id_key(id);
    cars.iter().find(|car| id_key(&car.id) == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use std::env;

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut cars = sample_catalog();
        let mut dup = cars[0].clone();
        dup.id = dup.id.to_uppercase();
        cars.push(dup);

        let errors = validate_catalog(&cars).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("duplicate id"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut car = sample_catalog().remove(0);
        car.seats = 0; // Error 1
        car.reliability = 6.0; // Error 2
        car.price = -1.0; // Error 3

        let errors = validate_catalog(&[car]).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("cars[0].seats")));
        assert!(errors.iter().any(|e| e.contains("cars[0].reliability")));
        assert!(errors.iter().any(|e| e.contains("cars[0].price")));
    }

    #[test]
    fn test_find_car_case_insensitive() {
        let cars = sample_catalog();
        let car = find_car(&cars, "Renault-Clio").unwrap();
        assert_eq!(car.model, "Clio");
        assert!(find_car(&cars, "nope").is_none());
    }

    #[test]
    fn test_non_ascii_ids_fold_the_same_for_lookup_and_duplicates() {
        let mut cars = sample_catalog();
        cars[0].id = "Étoile".to_string();

        let car = find_car(&cars, "étoile").unwrap();
        assert_eq!(car.model, "Clio");
        assert!(validate_catalog(&cars).is_ok());

        let mut dup = cars[0].clone();
        dup.id = "ÉTOILE".to_string();
        cars.push(dup);
        let errors = validate_catalog(&cars).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("duplicate id 'ÉTOILE'"));
    }

    #[test]
    fn test_load_yaml_catalog() {
        let temp_path = env::temp_dir().join("car_comparator_test_catalog.yaml");
        let yaml = r#"
- id: clio
  brand: Renault
  model: Clio
  year: 2024
  category: Citadine
  fuelType: Essence
  price: 19500
  consumption: 5.2
  power: 90
  seats: 5
  reliability: 4
  safety: 4
  comfort: 3.5
  pros: ["Affordable"]
"#;
        fs::write(&temp_path, yaml).unwrap();

        let cars = load_catalog(&temp_path).unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].pros, vec!["Affordable".to_string()]);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_json_catalog_roundtrip() {
        let temp_path = env::temp_dir().join("car_comparator_test_catalog.json");
        let cars = sample_catalog();
        fs::write(&temp_path, serde_json::to_string_pretty(&cars).unwrap()).unwrap();

        let loaded = load_catalog(&temp_path).unwrap();
        assert_eq!(loaded, cars);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_invalid_catalog_reports_errors() {
        let temp_path = env::temp_dir().join("car_comparator_test_invalid.json");
        let mut cars = sample_catalog();
        cars[1].seats = 0;
        fs::write(&temp_path, serde_json::to_string(&cars).unwrap()).unwrap();

        let err = load_catalog(&temp_path).unwrap_err();
        assert!(err.to_string().contains("cars[1].seats"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_missing_catalog() {
        let temp_path = env::temp_dir().join("car_comparator_test_missing_catalog.yaml");
        let _ = fs::remove_file(&temp_path);
        assert!(load_catalog(&temp_path).is_err());
    }
}
