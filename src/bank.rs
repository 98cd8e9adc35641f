use anyhow::Context;
use model::Bank;
use std::{fs::File, io::BufReader, path::Path};

const CAPITALS: &str = include_str!("../data/capitals.json");

/// The built-in quiz on European capitals.
pub fn capitals() -> serde_json::Result<Bank> {
    serde_json::from_str(CAPITALS)
}

/// Loads a question bank from a JSON file, validating it along the way.
pub fn from_path(path: &Path) -> anyhow::Result<Bank> {
    let file = File::open(path).with_context(|| format!("cannot open question bank at {}", path.display()))?;
    let bank = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("malformed question bank at {}", path.display()))?;
    Ok(bank)
}
