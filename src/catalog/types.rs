use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Fuel or energy source of a car.
///
/// Serialized with the catalog's French literals (`"Électrique"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum FuelType {
    Essence,
    Diesel,
    #[serde(rename = "Électrique")]
    Electrique,
    Hybride,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Essence,
        FuelType::Diesel,
        FuelType::Electrique,
        FuelType::Hybride,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Essence => "Essence",
            FuelType::Diesel => "Diesel",
            FuelType::Electrique => "Électrique",
            FuelType::Hybride => "Hybride",
        }
    }

    pub fn is_electric(&self) -> bool {
        matches!(self, FuelType::Electrique)
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "essence" | "petrol" | "gasoline" => Ok(FuelType::Essence),
            "diesel" => Ok(FuelType::Diesel),
            "electrique" | "electric" => Ok(FuelType::Electrique),
            "hybride" | "hybrid" => Ok(FuelType::Hybride),
            _ => Err(EngineError::UnknownEnumValue {
                kind: "fuel type",
                value: s.to_string(),
                expected: "Essence, Diesel, Électrique, Hybride",
            }),
        }
    }
}

/// Body category used by the catalog filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    Citadine,
    Compacte,
    Berline,
    #[serde(rename = "SUV")]
    Suv,
    Familiale,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Citadine => "Citadine",
            Category::Compacte => "Compacte",
            Category::Berline => "Berline",
            Category::Suv => "SUV",
            Category::Familiale => "Familiale",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "citadine" => Ok(Category::Citadine),
            "compacte" => Ok(Category::Compacte),
            "berline" => Ok(Category::Berline),
            "suv" => Ok(Category::Suv),
            "familiale" => Ok(Category::Familiale),
            _ => Err(EngineError::UnknownEnumValue {
                kind: "category",
                value: s.to_string(),
                expected: "Citadine, Compacte, Berline, SUV, Familiale",
            }),
        }
    }
}

/// A car record as supplied by the catalog. Read-only for the engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub category: Category,
    pub fuel_type: FuelType,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,

    /// Price in euros
    pub price: f64,
    /// L/100km, or kWh/100km for electric cars
    pub consumption: f64,
    /// Engine output in horsepower
    pub power: f64,
    pub seats: u32,
    /// Ratings on a 0-5 scale
    pub reliability: f64,
    pub safety: f64,
    pub comfort: f64,
}

impl Car {
    /// "Brand Model", as shown in tables
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Unit of the consumption figure
    pub fn consumption_unit(&self) -> &'static str {
        if self.fuel_type.is_electric() {
            "kWh"
        } else {
            "L"
        }
    }
}

/// Lowercase and strip the French accents used by the enum literals, so
/// "Électrique", "electrique" and "ELECTRIQUE" all parse.
pub(crate) fn fold(s: &str) -> String {
    s.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'à' | 'â' => 'a',
            'ô' => 'o',
            'î' | 'ï' => 'i',
            'û' | 'ù' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
