use std::path::PathBuf;
use std::process;

use clap::Parser;

use eccalc::batch;

/// Elliptic curve task calculator: evaluates add/multiply task files over
/// Z_p and GF(2^n) curves.
#[derive(Parser)]
#[command(name = "eccalc", version, about)]
struct Args {
    /// Directory containing *.txt task files
    input: PathBuf,

    /// Directory to write result files to
    #[arg(short, long, default_value = "results")]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = batch::run_directory(&args.input, &args.output) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
