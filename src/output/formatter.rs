use owo_colors::OwoColorize;
use std::collections::HashMap;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::catalog::Car;
use crate::comparison::{ComparisonSummary, CriteriaCheck};
use crate::scoring::{ScoreResult, ScoreTier};

/// Width of one car column in the comparison table
const COLUMN_WIDTH: usize = 22;
/// Width of the criterion label column in the comparison table
const LABEL_WIDTH: usize = 14;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score as a whole number out of 100
pub fn format_score(score: f64) -> String {
    format!("{:.0}", score)
}

/// Format a price with space-separated thousands: "19 500 €"
pub fn format_price(price: f64) -> String {
    let rounded = price.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{} €", sign, grouped)
}

/// Five-star rendering of a 0-5 rating: "★★★★☆ (4/5)"
pub fn format_rating(rating: f64) -> String {
    let filled = rating.clamp(0.0, 5.0).floor() as usize;
    format!("{}{} ({}/5)", "★".repeat(filled), "☆".repeat(5 - filled), rating)
}

/// Consumption with its unit: "5.2 L/100km", "17 kWh/100km"
pub fn format_consumption(car: &Car) -> String {
    format!("{} {}/100km", car.consumption, car.consumption_unit())
}

/// Color a piece of text by the tier of a score (green/yellow/red)
fn paint_by_tier(text: &str, score: f64) -> String {
    match ScoreTier::from_score(score) {
        ScoreTier::Excellent => text.green().bold().to_string(),
        ScoreTier::Good => text.yellow().bold().to_string(),
        ScoreTier::Avoid => text.red().bold().to_string(),
    }
}

/// A car with its calculated score for display
pub struct ScoredCar<'a> {
    pub car: &'a Car,
    pub score: f64,
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked cars as a table with columns: Index, Score, Tier, Price, Fuel, Name
/// No headers (minimal format). The name comes last so the fixed columns stay aligned.
pub fn format_scored_table(cars: &[ScoredCar], use_colors: bool) -> String {
    if cars.is_empty() {
        return "No cars match your filters.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 3;
    let tier_width = 16; // "Excellent choice"
    let price_width = 10; // "148 000 €"
    let fuel_width = 10; // "Électrique"
    let separator = "  ";
    let fixed_width =
        index_width + 1 + score_width + tier_width + price_width + fuel_width + separator.len() * 4;

    cars.iter()
        .enumerate()
        .map(|(idx, scored)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", format_score(scored.score), width = score_width);
            let tier = format!(
                "{:<width$}",
                ScoreTier::from_score(scored.score).label(),
                width = tier_width
            );
            let price = format!("{:>width$}", format_price(scored.car.price), width = price_width);
            let fuel = format!("{:<width$}", scored.car.fuel_type.as_str(), width = fuel_width);

            let name = scored.car.display_name();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_title(&name, width - fixed_width),
                // Very narrow terminal, show truncated
                Some(_) => truncate_title(&name, 20),
                // No terminal (pipe), don't truncate
                None => name,
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    paint_by_tier(&score_padded, scored.score),
                    separator,
                    paint_by_tier(&tier, scored.score),
                    separator,
                    price.cyan(),
                    separator,
                    fuel.dimmed(),
                    separator,
                    name.bold()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str, score_padded, separator, tier, separator, price, separator, fuel, separator, name
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format cars as tab-separated values for scripting
/// Columns: score, id, name, price (no headers, no colors)
pub fn format_tsv(cars: &[ScoredCar]) -> String {
    if cars.is_empty() {
        return String::new();
    }

    cars.iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}",
                scored.score.round() as i64,
                scored.car.id,
                scored.car.display_name(),
                scored.car.price.round() as i64
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single car with its specs and score breakdown
pub fn format_car_detail(car: &Car, result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let title = format!("{} ({})", car.display_name(), car.year);
    let score_line = format!(
        "{}/100 - {}",
        format_score(result.score),
        ScoreTier::from_score(result.score).label()
    );
    if use_colors {
        lines.push(title.bold().to_string());
        lines.push(format!("  Score: {}", paint_by_tier(&score_line, result.score)));
    } else {
        lines.push(title);
        lines.push(format!("  Score: {}", score_line));
    }

    lines.push(format!("  Price: {}", format_price(car.price)));
    lines.push(format!("  Category: {}", car.category));
    lines.push(format!("  Fuel: {}", car.fuel_type));
    lines.push(format!("  Power: {} hp", car.power));
    lines.push(format!("  Seats: {}", car.seats));
    lines.push(format!("  Consumption: {}", format_consumption(car)));
    lines.push(format!("  Reliability: {}", format_rating(car.reliability)));
    lines.push(format!("  Safety: {}", format_rating(car.safety)));
    lines.push(format!("  Comfort: {}", format_rating(car.comfort)));

    for (heading, items) in [
        ("Features", &car.features),
        ("Pros", &car.pros),
        ("Cons", &car.cons),
    ] {
        if !items.is_empty() {
            lines.push(format!("  {}:", heading));
            lines.extend(items.iter().map(|item| format!("    - {}", item)));
        }
    }

    lines.push("  Breakdown:".to_string());
    for dim in &result.breakdown.dimensions {
        lines.push(format!(
            "    {:<12} {:>6.1} x {:>2} -> {:>6.2}",
            dim.dimension.label(),
            dim.sub_score,
            dim.weight,
            dim.contribution
        ));
    }
    for bonus in &result.breakdown.bonuses {
        lines.push(format!("    {:<12} {:+}", bonus.bonus.label(), bonus.points));
    }
    let total_line = format!(
        "    Total        {:.2} / {} = {:.1}",
        result.breakdown.total, result.breakdown.max_total, result.raw
    );
    lines.push(total_line);
    if result.capped() {
        lines.push("    (capped at 100)".to_string());
    }

    lines.join("\n")
}

/// Format a side-by-side comparison with winners marked by `*`
///
/// `checks` adds the budget and seating rows when present.
pub fn format_comparison(
    cars: &[Car],
    scores: &HashMap<String, f64>,
    summary: &ComparisonSummary,
    checks: Option<&[CriteriaCheck]>,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let best = summary.best;
    let best_score = scores.get(&best.id).copied().unwrap_or_default();
    let header = format!(
        "Comparison of {} {}. Best choice: {} ({}/100)",
        cars.len(),
        if cars.len() == 1 { "car" } else { "cars" },
        best.display_name(),
        format_score(best_score)
    );
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });
    lines.push(format!(
        "  Lowest price: {} ({})",
        format_price(summary.price_winner.price),
        summary.price_winner.display_name()
    ));
    lines.push(format!(
        "  Lowest consumption: {} ({})",
        format_consumption(summary.consumption_winner),
        summary.consumption_winner.display_name()
    ));
    lines.push(format!(
        "  Most reliable: {}/5 ({})",
        summary.reliability_winner.reliability,
        summary.reliability_winner.display_name()
    ));
    lines.push(String::new());

    // Cell text is padded before coloring so ANSI codes do not skew widths
    let row = |label: &str, cells: Vec<(String, bool)>| -> String {
        let mut line = format!("{:<width$}", label, width = LABEL_WIDTH);
        for (text, highlight) in cells {
            let marked = if highlight { format!("{} *", text) } else { text };
            let padded = format!("{:<width$}", truncate_title(&marked, COLUMN_WIDTH - 1), width = COLUMN_WIDTH);
            if use_colors && highlight {
                line.push_str(&padded.green().bold().to_string());
            } else {
                line.push_str(&padded);
            }
        }
        line.trim_end().to_string()
    };

    let is = |winner: &Car, car: &Car| winner.id == car.id;

    lines.push(row(
        "",
        cars.iter().map(|c| (c.display_name(), false)).collect(),
    ));
    lines.push(row(
        "Score",
        cars.iter()
            .map(|c| {
                let score = scores.get(&c.id).copied().unwrap_or_default();
                (format!("{}/100", format_score(score)), is(summary.best, c))
            })
            .collect(),
    ));
    lines.push(row(
        "Price",
        cars.iter()
            .map(|c| (format_price(c.price), is(summary.price_winner, c)))
            .collect(),
    ));
    lines.push(row(
        "Fuel",
        cars.iter().map(|c| (c.fuel_type.to_string(), false)).collect(),
    ));
    lines.push(row(
        "Consumption",
        cars.iter()
            .map(|c| (format_consumption(c), is(summary.consumption_winner, c)))
            .collect(),
    ));
    lines.push(row(
        "Power",
        cars.iter()
            .map(|c| (format!("{} hp", c.power), is(summary.power_winner, c)))
            .collect(),
    ));
    lines.push(row(
        "Seats",
        cars.iter().map(|c| (c.seats.to_string(), false)).collect(),
    ));
    lines.push(row(
        "Reliability",
        cars.iter()
            .map(|c| (format!("{}/5", c.reliability), is(summary.reliability_winner, c)))
            .collect(),
    ));
    lines.push(row(
        "Safety",
        cars.iter().map(|c| (format!("{}/5", c.safety), false)).collect(),
    ));
    lines.push(row(
        "Comfort",
        cars.iter().map(|c| (format!("{}/5", c.comfort), false)).collect(),
    ));

    if let Some(checks) = checks {
        let yes_no = |ok: bool| (if ok { "yes" } else { "no" }).to_string();
        lines.push(row(
            "Within budget",
            checks.iter().map(|c| (yes_no(c.within_budget), false)).collect(),
        ));
        lines.push(row(
            "Enough seats",
            checks.iter().map(|c| (yes_no(c.enough_seats), false)).collect(),
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::comparison::{compare, criteria_checks};
    use crate::scoring::{calculate_score, ComparisonCriteria, Weights};

    fn sample_car() -> Car {
        sample_catalog().remove(0) // Renault Clio
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(19_500.0), "19 500 €");
        assert_eq!(format_price(950.0), "950 €");
        assert_eq!(format_price(1_000.0), "1 000 €");
        assert_eq!(format_price(148_000.4), "148 000 €");
        assert_eq!(format_price(1_250_000.0), "1 250 000 €");
        assert_eq!(format_price(0.0), "0 €");
    }

    #[test]
    fn test_format_score_rounds() {
        assert_eq!(format_score(87.4), "87");
        assert_eq!(format_score(87.6), "88");
        assert_eq!(format_score(100.0), "100");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.0), "★★★★☆ (4/5)");
        assert_eq!(format_rating(3.5), "★★★☆☆ (3.5/5)");
        assert_eq!(format_rating(0.0), "☆☆☆☆☆ (0/5)");
    }

    #[test]
    fn test_format_consumption_units() {
        let cars = sample_catalog();
        let zoe = cars.iter().find(|c| c.id == "renault-zoe").unwrap();
        assert_eq!(format_consumption(zoe), "17.2 kWh/100km");
        assert_eq!(format_consumption(&cars[0]), "5.2 L/100km");
    }

    #[test]
    fn test_truncate_title_short() {
        assert_eq!(truncate_title("Renault Clio", 20), "Renault Clio");
    }

    #[test]
    fn test_truncate_title_long() {
        assert_eq!(truncate_title("Volkswagen Golf Variant", 15), "Volkswagen G...");
    }

    #[test]
    fn test_truncate_title_unicode() {
        assert_eq!(truncate_title("Citroën ë-C4 Électrique", 10), "Citroën...");
    }

    #[test]
    fn test_format_scored_table_empty() {
        let cars: Vec<ScoredCar> = vec![];
        assert_eq!(format_scored_table(&cars, false), "No cars match your filters.");
    }

    #[test]
    fn test_format_scored_table_rows() {
        let cars = sample_catalog();
        let scored = vec![
            ScoredCar { car: &cars[0], score: 91.2 },
            ScoredCar { car: &cars[1], score: 64.0 },
            ScoredCar { car: &cars[2], score: 12.0 },
        ];
        let result = format_scored_table(&scored, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains(" 91"));
        assert!(lines[0].contains("Excellent choice"));
        assert!(lines[0].contains("Renault Clio"));
        assert!(lines[0].contains("19 500 €"));
        assert!(lines[1].contains("Good choice"));
        assert!(lines[2].starts_with(" 3."));
        assert!(lines[2].contains("Avoid"));
        assert!(lines[2].contains("Électrique"));

        // Name is the last column, so everything before it lines up
        let names = ["Renault Clio", "Peugeot 208", "Renault Zoe"];
        let name_offsets: Vec<usize> = lines
            .iter()
            .zip(names)
            .map(|(line, name)| {
                assert!(line.ends_with(name));
                line.chars().count() - name.chars().count()
            })
            .collect();
        assert!(name_offsets.iter().all(|&offset| offset == name_offsets[0]));
    }

    #[test]
    fn test_format_tsv() {
        let car = sample_car();
        let scored = vec![ScoredCar { car: &car, score: 82.6 }];
        assert_eq!(format_tsv(&scored), "83\trenault-clio\tRenault Clio\t19500");
    }

    #[test]
    fn test_format_tsv_empty() {
        let cars: Vec<ScoredCar> = vec![];
        assert_eq!(format_tsv(&cars), "");
    }

    #[test]
    fn test_format_car_detail() {
        let car = sample_car();
        let criteria = ComparisonCriteria {
            budget: 20_000.0,
            ..Default::default()
        };
        let result = calculate_score(&car, &criteria, &Weights::default()).unwrap();
        let detail = format_car_detail(&car, &result, false);

        assert!(detail.starts_with("Renault Clio (2024)"));
        assert!(detail.contains("Price: 19 500 €"));
        assert!(detail.contains("Consumption: 5.2 L/100km"));
        assert!(detail.contains("Reliability: ★★★★☆ (4/5)"));
        assert!(detail.contains("    - Affordable"));
        assert!(detail.contains("Budget fit"));
        assert!(detail.contains("Seats the family"));
        // 5.2 L/100km misses the Économie threshold
        assert!(!detail.contains("Priority:"));
    }

    #[test]
    fn test_format_comparison_marks_winners() {
        let all = sample_catalog();
        let cars: Vec<Car> = all
            .into_iter()
            .filter(|c| ["renault-clio", "tesla-model-3", "toyota-corolla"].contains(&c.id.as_str()))
            .collect();
        let criteria = ComparisonCriteria::default();
        let scores: HashMap<String, f64> = cars
            .iter()
            .map(|c| {
                let r = calculate_score(c, &criteria, &Weights::default()).unwrap();
                (c.id.clone(), r.score)
            })
            .collect();
        let summary = compare(&cars, &scores).unwrap();
        let checks = criteria_checks(&cars, &criteria);

        let table = format_comparison(&cars, &scores, &summary, Some(&checks), false);

        assert!(table.starts_with("Comparison of 3 cars. Best choice:"));
        assert!(table.contains("Lowest price: 19 500 € (Renault Clio)"));
        let power_row = table.lines().find(|l| l.starts_with("Power")).unwrap();
        assert!(power_row.contains("283 hp *"));
        let reliability_row = table.lines().find(|l| l.starts_with("Reliability")).unwrap();
        assert!(reliability_row.contains("5/5 *"));
        assert!(table.lines().any(|l| l.starts_with("Within budget")));
        assert!(table.lines().any(|l| l.starts_with("Enough seats")));
    }

    #[test]
    fn test_format_comparison_without_checks() {
        let cars = vec![sample_car()];
        let scores: HashMap<String, f64> = [(cars[0].id.clone(), 70.0)].into_iter().collect();
        let summary = compare(&cars, &scores).unwrap();

        let table = format_comparison(&cars, &scores, &summary, None, false);
        assert!(table.starts_with("Comparison of 1 car. Best choice:"));
        assert!(!table.contains("Within budget"));
        assert!(table.contains("70/100 *"));
    }
}
