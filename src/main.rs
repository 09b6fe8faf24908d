use clap::{Args, Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use car_comparator::catalog::{self, Car, Category, FuelType};
use car_comparator::comparison;
use car_comparator::filter::{newest_year, CarFilter};
use car_comparator::output;
use car_comparator::scoring::{self, ComparisonCriteria, Priority, Usage, Weights};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;
const EXIT_ENGINE: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank cars by score (default if no subcommand)
    List(ListArgs),
    /// Show one car with its score breakdown
    Show {
        /// Car id, as shown by `list --tsv`
        id: String,
    },
    /// Compare cars side by side
    Compare {
        /// Ids of the cars to compare
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    /// Only cars whose brand or model contains this text
    #[arg(long)]
    search: Option<String>,

    /// Only cars of this category (Citadine, Compacte, Berline, SUV, Familiale)
    #[arg(long)]
    category: Option<Category>,

    /// Only cars at or under this price
    #[arg(long)]
    max_price: Option<f64>,

    /// Only cars using this fuel (Essence, Diesel, Électrique, Hybride)
    #[arg(long)]
    fuel_type: Option<FuelType>,

    /// Minimum reliability rating (0-5)
    #[arg(long)]
    min_reliability: Option<f64>,

    /// Minimum safety rating (0-5)
    #[arg(long)]
    min_safety: Option<f64>,

    /// Only cars from this model year onwards
    #[arg(long, conflicts_with = "new")]
    min_year: Option<u16>,

    /// Only the newest model year in the catalog
    #[arg(long)]
    new: bool,

    /// Only cars with at least 150 hp
    #[arg(long)]
    high_performance: bool,

    /// Show at most this many cars
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Tab-separated output for scripting
    #[arg(long)]
    tsv: bool,
}

impl ListArgs {
    fn to_filter(&self, cars: &[Car]) -> CarFilter {
        let min_year = if self.new {
            newest_year(cars)
        } else {
            self.min_year
        };
        CarFilter {
            search: self.search.clone(),
            category: self.category,
            max_price: self.max_price,
            fuel_type: self.fuel_type,
            min_reliability: self.min_reliability,
            min_safety: self.min_safety,
            min_year,
            high_performance: self.high_performance,
        }
    }
}

/// Overrides for the configured criteria
#[derive(Args, Debug)]
struct CriteriaArgs {
    /// Budget in euros
    #[arg(long, global = true)]
    budget: Option<f64>,

    /// Preferred fuel type, or "none"
    #[arg(long, global = true, value_name = "FUEL")]
    prefer_fuel: Option<String>,

    /// Main usage (Ville, Route, Mixte)
    #[arg(long, global = true)]
    usage: Option<Usage>,

    /// Priority (Économie, Performance, Confort, Écologie)
    #[arg(long, global = true)]
    priority: Option<Priority>,

    /// Number of seats needed
    #[arg(long, global = true)]
    family_size: Option<u32>,
}

impl CriteriaArgs {
    fn apply(&self, mut criteria: ComparisonCriteria) -> Result<ComparisonCriteria, String> {
        if let Some(budget) = self.budget {
            criteria.budget = budget;
        }
        if let Some(ref fuel) = self.prefer_fuel {
            criteria.fuel_preference = if fuel.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(fuel.parse::<FuelType>().map_err(|e| e.to_string())?)
            };
        }
        if let Some(usage) = self.usage {
            criteria.usage = usage;
        }
        if let Some(priority) = self.priority {
            criteria.priority = priority;
        }
        if let Some(family_size) = self.family_size {
            criteria.family_size = family_size;
        }
        Ok(criteria)
    }
}

#[derive(Parser, Debug)]
#[command(name = "car-comparator")]
#[command(about = "Rank and compare cars against your budget and priorities", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/car-comparator/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file to use instead of the configured or built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(flatten)]
    criteria: CriteriaArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn exit_with(code: i32, message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or(Commands::List(ListArgs::default()));

    if let Commands::Init = command {
        if let Err(e) = car_comparator::config::run_init_wizard(cli.config) {
            exit_with(EXIT_CONFIG, format!("Init failed: {:#}", e));
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match car_comparator::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };

    // Validate scoring config at startup
    let scoring_config = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = scoring::validate_scoring(&scoring_config) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    let weights = scoring_config.resolve();

    let criteria = match cli
        .criteria
        .apply(config.criteria.clone().unwrap_or_default())
    {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_CONFIG, format!("Criteria error: {}", e)),
    };
    if let Err(e) = criteria.validate() {
        exit_with(EXIT_CONFIG, e);
    }
    tracing::debug!(
        budget = criteria.budget,
        priority = %criteria.priority,
        family_size = criteria.family_size,
        active = criteria.active_count(),
        "criteria"
    );

    let catalog_path = cli.catalog.or(config.catalog);
    let cars = match catalog_path {
        Some(ref path) => match catalog::load_catalog(path) {
            Ok(cars) => cars,
            Err(e) => exit_with(EXIT_CONFIG, format!("Catalog error: {:#}", e)),
        },
        None => catalog::sample_catalog(),
    };

    let use_colors = output::should_use_colors();

    match command {
        Commands::List(args) => run_list(cars, &args, &criteria, &weights, use_colors),
        Commands::Show { id } => run_show(&cars, &id, &criteria, &weights, use_colors),
        Commands::Compare { ids } => run_compare(&cars, &ids, &criteria, &weights, use_colors),
        Commands::Init => unreachable!("handled before config loading"),
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run_list(
    cars: Vec<Car>,
    args: &ListArgs,
    criteria: &ComparisonCriteria,
    weights: &Weights,
    use_colors: bool,
) {
    let cars = args.to_filter(&cars).apply(cars);

    let results = match scoring::score_cars(&cars, criteria, weights) {
        Ok(r) => r,
        Err(e) => exit_with(EXIT_ENGINE, e),
    };

    let mut scored: Vec<output::ScoredCar> = cars
        .iter()
        .map(|car| output::ScoredCar {
            car,
            score: results[&car.id].score,
        })
        .collect();

    // Score descending, then cheaper first; stable sort keeps catalog order for full ties
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                a.car
                    .price
                    .partial_cmp(&b.car.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });

    if let Some(limit) = args.limit {
        scored.truncate(limit);
    }

    if args.tsv {
        println!("{}", output::format_tsv(&scored));
    } else {
        println!("{}", output::format_scored_table(&scored, use_colors));
    }
}

fn run_show(
    cars: &[Car],
    id: &str,
    criteria: &ComparisonCriteria,
    weights: &Weights,
    use_colors: bool,
) {
    let Some(car) = catalog::find_car(cars, id) else {
        exit_with(EXIT_CONFIG, format!("Unknown car id '{}'", id));
    };

    match scoring::calculate_score(car, criteria, weights) {
        Ok(result) => println!("{}", output::format_car_detail(car, &result, use_colors)),
        Err(e) => exit_with(EXIT_ENGINE, e),
    }
}

fn run_compare(
    cars: &[Car],
    ids: &[String],
    criteria: &ComparisonCriteria,
    weights: &Weights,
    use_colors: bool,
) {
    // Keep the order given on the command line, dropping repeats
    let mut seen = HashSet::new();
    let mut selected: Vec<Car> = Vec::new();
    for id in ids {
        let Some(car) = catalog::find_car(cars, id) else {
            exit_with(EXIT_CONFIG, format!("Unknown car id '{}'", id));
        };
        if seen.insert(car.id.clone()) {
            selected.push(car.clone());
        }
    }

    let scores = match scoring::score_cars(&selected, criteria, weights) {
        Ok(results) => scoring::score_map(&results),
        Err(e) => exit_with(EXIT_ENGINE, e),
    };

    let summary = match comparison::compare(&selected, &scores) {
        Ok(s) => s,
        Err(e) => exit_with(EXIT_ENGINE, e),
    };
    let checks = comparison::criteria_checks(&selected, criteria);

    println!(
        "{}",
        output::format_comparison(&selected, &scores, &summary, Some(&checks), use_colors)
    );
}
