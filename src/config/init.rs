use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::catalog::FuelType;
use crate::config::{get_config_path, save_config, Config};
use crate::scoring::{ComparisonCriteria, Priority, ScoringConfig, Usage};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Re-prompt until the input parses.
fn prompt_parsed<T>(message: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    loop {
        let input = prompt_with_default(message, default)?;
        match input.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    }
}

/// Parse a budget answer; "25000", "25 000" and "25k" are all accepted.
fn parse_budget(input: &str) -> Result<f64, String> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '€' && *c != '_')
        .collect();
    let value = match cleaned.strip_suffix(['k', 'K']) {
        Some(thousands) => thousands.parse::<f64>().map(|v| v * 1_000.0),
        None => cleaned.parse::<f64>(),
    }
    .map_err(|_| format!("'{}' is not an amount", input))?;

    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err("budget must be positive".to_string())
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("Car Comparator Configuration Wizard");
    println!("===================================");
    println!();

    // 1. Criteria
    let defaults = ComparisonCriteria::default();
    println!("Your criteria drive every score. You can override them per run with flags.");

    let budget = loop {
        let input = prompt_with_default("Budget (EUR)", &format!("{}", defaults.budget))?;
        match parse_budget(&input) {
            Ok(v) => break v,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    let priority: Priority = prompt_parsed(
        "Priority (Économie, Performance, Confort, Écologie)",
        defaults.priority.as_str(),
    )?;

    let usage: Usage = prompt_parsed("Usage (Ville, Route, Mixte)", defaults.usage.as_str())?;

    let family_size = loop {
        let input = prompt_with_default("Seats needed", &defaults.family_size.to_string())?;
        match input.parse::<u32>() {
            Ok(v) if v >= 1 => break v,
            _ => println!("  Invalid: must be a whole number of at least 1. Try again."),
        }
    };

    let fuel_preference = loop {
        let input = prompt_with_default(
            "Preferred fuel (Essence, Diesel, Électrique, Hybride, or none)",
            "none",
        )?;
        if input.eq_ignore_ascii_case("none") || input.is_empty() {
            break None;
        }
        match input.parse::<FuelType>() {
            Ok(fuel) => break Some(fuel),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    // 2. Catalog
    println!();
    println!("Without a catalog file the built-in sample catalog is used.");
    let catalog_input = prompt_with_default("Catalog file (YAML or JSON, or none)", "none")?;
    let catalog = if catalog_input.eq_ignore_ascii_case("none") || catalog_input.is_empty() {
        None
    } else {
        Some(PathBuf::from(catalog_input))
    };

    // 3. Config path
    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 4. Write config
    let config = Config {
        catalog,
        criteria: Some(ComparisonCriteria {
            budget,
            fuel_preference,
            usage,
            priority,
            family_size,
        }),
        scoring: Some(ScoringConfig::default()),
    };
    save_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Scoring weights are in the `scoring` section if you want to tune them.");
    println!("Run `car-comparator` to get started.");

    Ok(())
}
