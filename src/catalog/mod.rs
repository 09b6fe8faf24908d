pub mod loader;
pub mod sample;
pub mod types;

pub use loader::{find_car, load_catalog, validate_catalog};
pub use sample::sample_catalog;
pub use types::{Car, Category, FuelType};
