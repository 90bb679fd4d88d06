//! Wordmash CLI — generate frankenwords from a word list.
//!
//! Thin wrapper over the `wordmash` library crate: loads the input files,
//! runs one generation session, and writes the results one per line.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wordmash::{WordMasher, load_special_chars, load_word_list};

/// Wordmash — synthesize pseudo-random frankenwords from fragments of real
/// words.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Word list file, one candidate word per line.
    #[arg(long)]
    words: PathBuf,

    /// Special-character file, one character per line. Omit to disable
    /// special-character injection.
    #[arg(long)]
    special_chars: Option<PathBuf>,

    /// How many frankenwords to generate.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=1000))]
    count: u64,

    /// Output file, overwritten with one frankenword per line.
    #[arg(long)]
    output: PathBuf,

    /// Allow splitting frankenwords into 2-3 space-separated pieces.
    #[arg(long)]
    split: bool,

    /// PRNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let rng = SmallRng::seed_from_u64(seed);

    let pool = load_word_list(&args.words)
        .with_context(|| format!("reading word list {}", args.words.display()))?;
    if pool.is_empty() {
        bail!("word list {} contains no words", args.words.display());
    }

    let special_chars = match &args.special_chars {
        Some(path) => load_special_chars(path)
            .with_context(|| format!("reading special characters {}", path.display()))?,
        None => Vec::new(),
    };
    info!(
        "loaded {} candidate words and {} special characters (seed {seed})",
        pool.len(),
        special_chars.len()
    );

    let mut masher = WordMasher::new(pool, rng)
        .with_special_chars(special_chars)
        .with_splitting(args.split);
    let frankenwords = masher.generate(args.count as usize)?;

    let mut body = frankenwords.join("\n");
    body.push('\n');
    fs::write(&args.output, body)
        .with_context(|| format!("writing output {}", args.output.display()))?;
    info!(
        "wrote {} frankenwords to {}",
        frankenwords.len(),
        args.output.display()
    );

    Ok(())
}
