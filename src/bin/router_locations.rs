use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use router_locations::source::{DatasetSource, FileSource};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "router_locations",
    about = "Report which router locations are connected to each other"
)]
struct Cli {
    /// Read the dataset from a local JSON file instead of the API
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "reqwest")]
fn remote_source() -> Result<Box<dyn DatasetSource>> {
    Ok(Box::new(router_locations::source::RemoteSource::default()))
}

#[cfg(not(feature = "reqwest"))]
fn remote_source() -> Result<Box<dyn DatasetSource>> {
    anyhow::bail!("built without the `reqwest` feature; pass --input <PATH>")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source: Box<dyn DatasetSource> = match cli.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => remote_source()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    router_locations::run(source.as_ref(), &mut out)?;
    out.flush()?;
    Ok(())
}
