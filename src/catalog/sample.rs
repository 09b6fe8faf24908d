use super::types::{Car, Category, FuelType};

struct Spec {
    id: &'static str,
    brand: &'static str,
    model: &'static str,
    year: u16,
    category: Category,
    fuel_type: FuelType,
    price: f64,
    consumption: f64,
    power: f64,
    seats: u32,
    reliability: f64,
    safety: f64,
    comfort: f64,
    features: &'static [&'static str],
    pros: &'static [&'static str],
    cons: &'static [&'static str],
}

impl Spec {
    fn into_car(self) -> Car {
        Car {
            id: self.id.to_string(),
            brand: self.brand.to_string(),
            model: self.model.to_string(),
            year: self.year,
            category: self.category,
            fuel_type: self.fuel_type,
            image: None,
            features: strings(self.features),
            pros: strings(self.pros),
            cons: strings(self.cons),
            price: self.price,
            consumption: self.consumption,
            power: self.power,
            seats: self.seats,
            reliability: self.reliability,
            safety: self.safety,
            comfort: self.comfort,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in catalog used when no catalog file is configured.
pub fn sample_catalog() -> Vec<Car> {
    vec![
        Spec {
            id: "renault-clio",
            brand: "Renault",
            model: "Clio",
            year: 2024,
            category: Category::Citadine,
            fuel_type: FuelType::Essence,
            price: 19_500.0,
            consumption: 5.2,
            power: 90.0,
            seats: 5,
            reliability: 4.0,
            safety: 4.0,
            comfort: 3.5,
            features: &["Apple CarPlay", "Rear parking sensors", "Lane keeping assist"],
            pros: &["Affordable", "Easy to park", "Low running costs"],
            cons: &["Small boot", "Modest power"],
        },
        Spec {
            id: "peugeot-208",
            brand: "Peugeot",
            model: "208",
            year: 2023,
            category: Category::Citadine,
            fuel_type: FuelType::Essence,
            price: 21_000.0,
            consumption: 5.4,
            power: 100.0,
            seats: 5,
            reliability: 3.5,
            safety: 4.0,
            comfort: 4.0,
            features: &["i-Cockpit 3D", "Automatic emergency braking"],
            pros: &["Stylish interior", "Comfortable ride"],
            cons: &["Cramped rear seats"],
        },
        Spec {
            id: "renault-zoe",
            brand: "Renault",
            model: "Zoe",
            year: 2023,
            category: Category::Citadine,
            fuel_type: FuelType::Electrique,
            price: 32_000.0,
            consumption: 17.2,
            power: 135.0,
            seats: 5,
            reliability: 4.0,
            safety: 3.5,
            comfort: 3.5,
            features: &["Fast charging", "Heat pump", "Connected navigation"],
            pros: &["Zero emissions", "Quiet in town"],
            cons: &["Limited range on motorway", "Two-star Euro NCAP"],
        },
        Spec {
            id: "vw-golf",
            brand: "Volkswagen",
            model: "Golf",
            year: 2024,
            category: Category::Compacte,
            fuel_type: FuelType::Diesel,
            price: 29_500.0,
            consumption: 4.6,
            power: 115.0,
            seats: 5,
            reliability: 4.0,
            safety: 4.5,
            comfort: 4.0,
            features: &["Digital cockpit", "Adaptive cruise control"],
            pros: &["Refined", "Frugal on long trips"],
            cons: &["Touch controls", "Pricey options"],
        },
        Spec {
            id: "toyota-corolla",
            brand: "Toyota",
            model: "Corolla",
            year: 2024,
            category: Category::Compacte,
            fuel_type: FuelType::Hybride,
            price: 31_000.0,
            consumption: 4.4,
            power: 140.0,
            seats: 5,
            reliability: 5.0,
            safety: 4.5,
            comfort: 4.0,
            features: &["Self-charging hybrid", "Toyota Safety Sense"],
            pros: &["Very reliable", "Low consumption in town"],
            cons: &["Noisy under hard acceleration"],
        },
        Spec {
            id: "tesla-model-3",
            brand: "Tesla",
            model: "Model 3",
            year: 2024,
            category: Category::Berline,
            fuel_type: FuelType::Electrique,
            price: 42_000.0,
            consumption: 14.5,
            power: 283.0,
            seats: 5,
            reliability: 3.5,
            safety: 5.0,
            comfort: 4.0,
            features: &["Autopilot", "Supercharger network", "Over-the-air updates"],
            pros: &["Efficient", "Quick", "Large charging network"],
            cons: &["Firm suspension", "Build quality"],
        },
        Spec {
            id: "bmw-320d",
            brand: "BMW",
            model: "320d",
            year: 2022,
            category: Category::Berline,
            fuel_type: FuelType::Diesel,
            price: 48_000.0,
            consumption: 4.9,
            power: 190.0,
            seats: 5,
            reliability: 4.0,
            safety: 4.5,
            comfort: 4.5,
            features: &["Head-up display", "Adaptive LED headlights"],
            pros: &["Great to drive", "Long range"],
            cons: &["Expensive", "Diesel restrictions in cities"],
        },
        Spec {
            id: "dacia-duster",
            brand: "Dacia",
            model: "Duster",
            year: 2024,
            category: Category::Suv,
            fuel_type: FuelType::Essence,
            price: 20_000.0,
            consumption: 6.4,
            power: 130.0,
            seats: 5,
            reliability: 3.5,
            safety: 3.0,
            comfort: 3.0,
            features: &["4x4 option", "Roof bars"],
            pros: &["Unbeatable price", "Rugged"],
            cons: &["Basic safety kit", "Road noise"],
        },
        Spec {
            id: "peugeot-3008",
            brand: "Peugeot",
            model: "3008",
            year: 2023,
            category: Category::Suv,
            fuel_type: FuelType::Hybride,
            price: 41_000.0,
            consumption: 1.4,
            power: 225.0,
            seats: 5,
            reliability: 3.5,
            safety: 4.5,
            comfort: 4.5,
            features: &["Plug-in hybrid", "Night vision", "Massage seats"],
            pros: &["Premium cabin", "Low fuel use on short trips"],
            cons: &["Heavy", "Small fuel tank"],
        },
        Spec {
            id: "kia-ev6",
            brand: "Kia",
            model: "EV6",
            year: 2024,
            category: Category::Suv,
            fuel_type: FuelType::Electrique,
            price: 47_000.0,
            consumption: 17.0,
            power: 229.0,
            seats: 5,
            reliability: 4.5,
            safety: 5.0,
            comfort: 4.5,
            features: &["800V ultra-fast charging", "Vehicle-to-load"],
            pros: &["Charges in 18 minutes", "Seven-year warranty"],
            cons: &["Rear visibility"],
        },
        Spec {
            id: "dacia-jogger",
            brand: "Dacia",
            model: "Jogger",
            year: 2024,
            category: Category::Familiale,
            fuel_type: FuelType::Hybride,
            price: 25_000.0,
            consumption: 4.9,
            power: 140.0,
            seats: 7,
            reliability: 3.5,
            safety: 2.5,
            comfort: 3.0,
            features: &["Seven seats", "Modular roof bars"],
            pros: &["Seven seats for the price", "Frugal hybrid"],
            cons: &["One-star Euro NCAP", "Hard plastics"],
        },
        Spec {
            id: "skoda-kodiaq",
            brand: "Skoda",
            model: "Kodiaq",
            year: 2023,
            category: Category::Familiale,
            fuel_type: FuelType::Diesel,
            price: 44_000.0,
            consumption: 5.8,
            power: 150.0,
            seats: 7,
            reliability: 4.5,
            safety: 5.0,
            comfort: 4.5,
            features: &["Seven seats", "Three-zone climate", "Towbar"],
            pros: &["Huge boot", "Well built"],
            cons: &["Third row is tight for adults"],
        },
    ]
    .into_iter()
    .map(Spec::into_car)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_ids_unique() {
        let cars = sample_catalog();
        let ids: HashSet<_> = cars.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), cars.len());
    }

    #[test]
    fn test_sample_catalog_covers_every_fuel_type() {
        let cars = sample_catalog();
        for fuel in FuelType::ALL {
            assert!(
                cars.iter().any(|c| c.fuel_type == fuel),
                "no {} car in sample catalog",
                fuel
            );
        }
    }

    #[test]
    fn test_sample_catalog_passes_validation() {
        let cars = sample_catalog();
        assert!(crate::catalog::validate_catalog(&cars).is_ok());
    }
}
