use std::{path::PathBuf, process};

use clap::Parser;
use lsystem::{
    grammar::{config::GrammarConfig, token::format_tokens},
    turtle_system,
};
use tracing_subscriber::EnvFilter;

/// lsystem grows parametric L-system grammars and replays them on a turtle.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a JSON grammar description.
    grammar: PathBuf,

    /// Overrides the number of iterations given in the grammar.
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Replays the grown sequence on a turtle and prints the segments it draws.
    #[arg(short, long)]
    execute: bool,

    /// Prints segments as a JSON array. Implies --execute.
    #[arg(short, long)]
    json: bool,

    /// Raises log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = GrammarConfig::from_path(&args.grammar)?;
    let iterations = args.iterations.unwrap_or(config.iterations);

    let mut system = turtle_system(&config)?;
    let tokens = system.build(&config.axiom, &config.rules, iterations)?;

    if !(args.execute || args.json) {
        println!("{}", format_tokens(&tokens));
        return Ok(());
    }

    system.execute(&tokens)?;
    let segments = system.interpreter().segments();
    if args.json {
        println!("{}", serde_json::to_string_pretty(segments)?);
    } else {
        for segment in segments {
            println!("({:.4}, {:.4}) -> ({:.4}, {:.4}) width {:.4}",
                     segment.from.0, segment.from.1, segment.to.0, segment.to.1, segment.thickness);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        process::exit(1);
    }
}
