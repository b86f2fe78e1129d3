use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bitstring96::harness;

#[derive(Parser)]
#[command(name = "bitstring96", version)]
#[command(about = "Evaluates 96-bit bit-string tests from a file or stdin")]
struct Cli {
    /// Test file to evaluate; reads stdin when omitted
    input: Option<PathBuf>,

    /// Log at info level even without RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let out = stdout.lock();
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open test file {}", path.display()))?;
            harness::run(BufReader::new(file), out)?;
        }
        None => {
            let stdin = io::stdin();
            harness::run(stdin.lock(), out)?;
        }
    }
    Ok(())
}

/// Logs stay off unless RUST_LOG or --verbose asks for them; the result
/// stream on stdout is the product and must stay clean.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("info")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
