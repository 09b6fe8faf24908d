pub mod formatter;

pub use formatter::{
    format_car_detail, format_comparison, format_consumption, format_price, format_rating,
    format_score, format_scored_table, format_tsv, should_use_colors, ScoredCar,
};
