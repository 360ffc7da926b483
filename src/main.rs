use std::env;
use std::fs;

use anyhow::{Context, Result};

use summarizer::summarize;

fn main() -> Result<()> {
    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());

    let input = fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;

    let (total_distance, similarity_score) = summarize(input.lines())?;

    println!("{total_distance}");
    println!("{similarity_score}");

    Ok(())
}
