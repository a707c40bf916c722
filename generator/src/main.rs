use clap::Parser;
use haversine::dataset::{generate, write_files};
use haversine::earth;
use haversine::source::ValueSource;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    /// Zero picks a seed, which is printed so the run can be repeated.
    #[arg(long, default_value_t = 0)]
    seed: u32,
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    npoints: usize,
    #[arg(long, default_value = "hspairs.json")]
    json_out: PathBuf,
    #[arg(long, default_value = "hsdist.bin")]
    answers_out: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let mut source = ValueSource::new(args.seed);
    let data = generate(args.npoints, &mut source);

    let totals = match write_files(&data, earth::RADIUS, &args.json_out, &args.answers_out) {
        Ok(totals) => totals,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Random seed: {}", source.seed());
    println!("Pair count: {}", totals.count);
    println!("Sum: {:.16}", totals.sum);
    match totals.mean() {
        Some(mean) => println!("Mean: {:.16}", mean),
        None => println!("Mean: no pairs generated"),
    }
    ExitCode::SUCCESS
}
