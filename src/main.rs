use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use plainsight::io_utils::CliError;
use plainsight::{crack_with, SearchConfig, Stats, TrigramModel};

/// Demo ciphertext: a fixed substitution of a well known pangram.
const SAMPLE_CIPHERTEXT: &str = "WKH TXLFN EURZQ IRA MXPSV RYHU WKH ODCB GRJ.";

/// Built-in training corpus used when no corpus file is given. Large
/// enough that the demo ciphertext is actually recoverable.
const SAMPLE_CORPUS: &str = include_str!("../data/sample_corpus.txt");

/// Recover the plaintext of a monoalphabetic substitution cipher.
#[derive(Parser)]
struct Args {
    /// Ciphertext file; the embedded sample is used when omitted
    input: Option<PathBuf>,
    /// Training corpus for the language model
    #[arg(long)]
    corpus: Option<PathBuf>,
    /// Number of independent restarts
    #[arg(long, default_value_t = 500)]
    restarts: usize,
    /// Iteration budget per restart
    #[arg(long, default_value_t = 10_000)]
    iterations: usize,
    /// Neighbor keys sampled per iteration
    #[arg(long, default_value_t = 200)]
    samples: usize,
    /// Seed the random stream for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Emit the result as JSON on stdout
    #[arg(long)]
    json: bool,
    /// Suppress the progress bar and the run summary
    #[arg(long)]
    quiet: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let ciphertext = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::io("reading ciphertext from", path, e))?
            .to_ascii_uppercase(),
        None => SAMPLE_CIPHERTEXT.to_string(),
    };
    let corpus = match &args.corpus {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| CliError::io("reading corpus from", path, e))?
        }
        None => SAMPLE_CORPUS.to_string(),
    };

    let model = TrigramModel::build(&corpus);
    let config = SearchConfig {
        restarts: args.restarts,
        iterations: args.iterations,
        neighbor_samples: args.samples,
    };
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let bar = if args.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(config.restarts as u64);
        bar.set_style(ProgressStyle::with_template(
            "{bar:40} {pos}/{len} restarts {msg}",
        )?);
        bar
    };

    let start_time = Instant::now();
    let mut stats = Stats::new();
    let mut best_seen = f64::NEG_INFINITY;
    let best = crack_with(&ciphertext, &model, &config, &mut rng, |_, climb| {
        stats.record(climb);
        if climb.candidate.score > best_seen {
            best_seen = climb.candidate.score;
            bar.set_message(format!("best {best_seen:.2}"));
        }
        bar.inc(1);
    })
    .map_err(|e| CliError::msg(format!("search failed: {e}")))?;
    bar.finish_and_clear();

    if !args.quiet {
        stats.report();
        eprintln!("Finished in {:.2?}", start_time.elapsed());
    }

    if args.json {
        let out = serde_json::json!({
            "plaintext": best.plaintext,
            "score": best.score,
            "key": String::from_utf8_lossy(best.key.targets()),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Decrypted text: {}", best.plaintext);
        println!("Score: {}", best.score);
    }

    Ok(())
}
