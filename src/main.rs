//! N-Queens CLI - Run the genetic search from the command line.

use std::io;
use std::process;

use nqueens_ga::{
    evolution::{EvolutionLauncher, EvolutionOptions, QueensChallenge},
    report::ConsoleReporter,
    Result,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("nqueens-ga");

    if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        print_usage(program);
        return;
    }

    let options = match parse_options(args.get(1..).unwrap_or_default()) {
        Some(options) => options,
        None => {
            print_usage(program);
            process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(options: &EvolutionOptions) -> Result<()> {
    let launcher = EvolutionLauncher::for_options(options)?;
    let mut rng = options.rng();

    let result = {
        let mut reporter = ConsoleReporter::new(io::stdout().lock());
        launcher.evolve(options, &mut rng, &mut reporter)?
    };

    println!(
        "Distinct solutions in final population: {}",
        result.solutions(&QueensChallenge).len()
    );
    Ok(())
}

/// Reads `[board_size] [epochs] [seed]`; missing values keep their defaults.
fn parse_options(args: &[String]) -> Option<EvolutionOptions> {
    if args.len() > 3 {
        return None;
    }

    let mut builder = EvolutionOptions::builder();
    if let Some(arg) = args.first() {
        builder = builder.board_size(arg.parse().ok()?);
    }
    if let Some(arg) = args.get(1) {
        builder = builder.num_generations(arg.parse().ok()?);
    }
    if let Some(arg) = args.get(2) {
        builder = builder.seed(arg.parse().ok()?);
    }

    Some(builder.build())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [board_size] [epochs] [seed]", program);
    eprintln!();
    eprintln!("Search for non-attacking queen placements with a genetic algorithm.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  board_size  Number of queens and board width (default: 8)");
    eprintln!("  epochs      Number of generations to run (default: 1000)");
    eprintln!("  seed        Seed for a reproducible run (default: random)");
}
