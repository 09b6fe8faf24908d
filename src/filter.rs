use std::fmt;

use crate::catalog::{Car, Category, FuelType};

/// Cars at or above this power (hp) count as high performance
pub const HIGH_PERFORMANCE_POWER: f64 = 150.0;

/// Most recent model year in a catalog, the cut-off for "new cars only"
pub fn newest_year(cars: &[Car]) -> Option<u16> {
    cars.iter().map(|car| car.year).max()
}

/// Recognized catalog filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Search,
    Category,
    MaxPrice,
    FuelType,
    MinReliability,
    MinSafety,
    MinYear,
    HighPerformance,
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKey::Search => "search",
            FilterKey::Category => "category",
            FilterKey::MaxPrice => "max-price",
            FilterKey::FuelType => "fuel-type",
            FilterKey::MinReliability => "min-reliability",
            FilterKey::MinSafety => "min-safety",
            FilterKey::MinYear => "min-year",
            FilterKey::HighPerformance => "high-performance",
        };
        f.write_str(name)
    }
}

/// Typed catalog filter. Unset fields match every car.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarFilter {
    /// Case-insensitive substring of "brand model"
    pub search: Option<String>,
    pub category: Option<Category>,
    pub max_price: Option<f64>,
    pub fuel_type: Option<FuelType>,
    pub min_reliability: Option<f64>,
    pub min_safety: Option<f64>,
    pub min_year: Option<u16>,
    pub high_performance: bool,
}

impl CarFilter {
    pub fn matches(&self, car: &Car) -> bool {
        if let Some(ref search) = self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !car.display_name().to_lowercase().contains(&needle) {
                return false;
            }
        }
        if self.category.is_some_and(|category| car.category != category) {
            return false;
        }
        if self.max_price.is_some_and(|max| car.price > max) {
            return false;
        }
        if self.fuel_type.is_some_and(|fuel| car.fuel_type != fuel) {
            return false;
        }
        if self.min_reliability.is_some_and(|min| car.reliability < min) {
            return false;
        }
        if self.min_safety.is_some_and(|min| car.safety < min) {
            return false;
        }
        if self.min_year.is_some_and(|min| car.year < min) {
            return false;
        }
        if self.high_performance && car.power < HIGH_PERFORMANCE_POWER {
            return false;
        }
        true
    }

    /// Keep matching cars, preserving order
    pub fn apply(&self, cars: Vec<Car>) -> Vec<Car> {
        let before = cars.len();
        let kept: Vec<Car> = cars.into_iter().filter(|car| self.matches(car)).collect();
        tracing::debug!(before, after = kept.len(), active = ?self.active_keys(), "filtered catalog");
        kept
    }

    /// Keys that are set on this filter
    pub fn active_keys(&self) -> Vec<FilterKey> {
        let mut keys = Vec::new();
        if self.search.as_deref().is_some_and(|s| !s.trim().is_empty()) {
            keys.push(FilterKey::Search);
        }
        if self.category.is_some() {
            keys.push(FilterKey::Category);
        }
        if self.max_price.is_some() {
            keys.push(FilterKey::MaxPrice);
        }
        if self.fuel_type.is_some() {
            keys.push(FilterKey::FuelType);
        }
        if self.min_reliability.is_some() {
            keys.push(FilterKey::MinReliability);
        }
        if self.min_safety.is_some() {
            keys.push(FilterKey::MinSafety);
        }
        if self.min_year.is_some() {
            keys.push(FilterKey::MinYear);
        }
        if self.high_performance {
            keys.push(FilterKey::HighPerformance);
        }
        keys
    }
}
