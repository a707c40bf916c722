use clap::Parser;
use haversine::aggregate::{extract_numbers, summarize_extraction, Extraction, Stop, Summary};
use haversine::{answers, distance, earth};
use json::buffer::SourceBuffer;
use json::tokenizer::Tokenizer;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(value_name = "INPUT_JSON", required = true)]
    input_json: PathBuf,
    /// Reference distances written alongside the JSON by the generator.
    #[arg(long, value_name = "EXPECTED_F64")]
    answers: Option<PathBuf>,
    /// Print the first N tokens of the input before summing.
    #[arg(long, value_name = "N")]
    tokens: Option<usize>,
}

fn dump_tokens(source: &[u8], limit: usize) {
    println!("First {} tokens:", limit);
    for token in Tokenizer::new(source).take(limit) {
        println!("    {}", token);
    }
}

fn validate(extraction: &Extraction, summary: &Summary, answers_path: &Path) -> bool {
    let reference = match answers::read(answers_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };

    let mut mismatches = 0usize;
    for (pair, expected) in extraction.pairs().zip(reference.iter()) {
        let actual = distance::naive(&pair, earth::RADIUS);
        if (actual - expected).abs() > 1e-10 * f64::max(expected.abs(), 1.0) {
            mismatches += 1;
        }
    }

    let reference_sum: f64 = reference.iter().sum();
    println!("Validation:");
    println!("Reference pair count: {}", reference.len());
    if reference.len() != summary.pairs() {
        println!("Pair count mismatch: parsed {}", summary.pairs());
    }
    if !reference.is_empty() {
        let reference_mean = reference_sum / reference.len() as f64;
        println!("Reference mean: {:.16}", reference_mean);
        if let Some(mean) = summary.mean() {
            println!("Difference: {:.16}", f64::abs(reference_mean - mean));
        }
    }
    println!("Mismatched pairs: {}", mismatches);
    true
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let buffer = match SourceBuffer::load(&args.input_json) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(limit) = args.tokens {
        dump_tokens(&buffer, limit);
    }

    let extraction = extract_numbers(&buffer);
    let summary = summarize_extraction(&extraction, earth::RADIUS);

    if let Stop::Malformed { offset } = summary.stop {
        warn!(offset, "input ended early on a malformed token");
    }
    if summary.leftover != 0 {
        warn!(
            leftover = summary.leftover,
            "numbers left over after the last complete pair"
        );
    }

    match summary.mean() {
        Some(mean) => println!(
            "Haversine dist mean over {} pairs: {:.16}",
            summary.pairs(),
            mean
        ),
        None => println!("No complete pairs found"),
    }

    if let Some(answers_path) = &args.answers {
        if !validate(&extraction, &summary, answers_path) {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
