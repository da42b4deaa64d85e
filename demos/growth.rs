//! Growth statistics for a single generating set
//!
//! Usage: `cargo run --example growth -- 5 x y xy` generates 5 levels using
//! the generating set {x, y, xy} (inverses added).

use freegroup_growth::growth::{cayley_table, parse_words};
use freegroup_growth::prelude::*;
use freegroup_growth::utils::timing::timed;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((levels_arg, generators)) = args.split_first() else {
        println!(
            "Generates statistics for a single generating set.\n\
             Example usage: 'growth 5 x y xy' will generate 5 levels\n\
             using the generating set {{x, y, xy}}."
        );
        return Ok(());
    };

    let number_of_levels: usize = levels_arg.parse().map_err(|_| {
        FreeGroupError::InvalidArgument(format!("number of levels: {}", levels_arg))
    })?;

    let words = parse_words(generators, true)?;
    let levels = timed("level generation", || Levels::generate(&words, number_of_levels))?;

    println!("Level sizes: {:?}", levels.level_sizes());
    println!("Level ratios: {:?}", levels.level_ratios());
    println!("Cayley table:");
    println!("{}", cayley_table(generators, "html", true)?);

    Ok(())
}
