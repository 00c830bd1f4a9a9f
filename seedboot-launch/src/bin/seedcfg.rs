//! Tool to generate a startup configuration payload.

use anyhow::Error;
use clap::Parser;

use seedboot_launch::{SeedProvisioner, SodiumRandomSource, StartupConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

/// Startup configuration generator. Draws a fresh seed bundle from the
/// host's secure random source and prints it as the JSON flags payload.
#[derive(Parser)]
#[clap(version = "0.1.0")]
struct Opts {
    /// Pretty-print the JSON payload
    #[clap(long = "pretty")]
    pretty: bool,
}

fn run() -> Result<(), Error> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let source = SodiumRandomSource::new()?;
    let bundle = SeedProvisioner::new(source).provision()?;
    let config = StartupConfig::from(bundle);

    let json = if opts.pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_json::to_string(&config)?
    };
    println!("{}", json);

    Ok(())
}
