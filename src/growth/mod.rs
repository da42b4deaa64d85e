//! Growth statistics and tables from generating sets given as text

mod calculate;
mod growth_config;

pub use calculate::{cayley_table, growth_report, level_sizes, parse_words, ratios, GrowthReport};
pub use growth_config::GrowthConfig;
