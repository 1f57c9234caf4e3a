use rand::Rng;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const INTENT_HEADER: &str = "action, product, delta, payment";

/// Writes an intent script with the standard header followed by `rows`.
pub fn intent_file(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{INTENT_HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}

/// Writes `count` random add/change/remove intents over products `1..=8`.
pub fn random_intent_file(count: usize) -> Result<NamedTempFile, Error> {
    let mut rng = rand::thread_rng();
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{INTENT_HEADER}")?;

    for _ in 0..count {
        let product: u32 = rng.gen_range(1..=8);
        match rng.gen_range(0..10) {
            0..=5 => writeln!(file, "add, {product}, ,")?,
            6..=8 => writeln!(file, "change, {product}, {}, ", rng.gen_range(-3..=3))?,
            _ => writeln!(file, "remove, {product}, , ")?,
        }
    }

    file.flush()?;
    Ok(file)
}
