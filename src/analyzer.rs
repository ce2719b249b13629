use std::io::{self, Write};

use tracing::{info, warn};

use crate::connections::{self, ConnectionMap};
use crate::error::Result;
use crate::report;
use crate::source::DatasetSource;

/// Fetch and build. The first error aborts the run; nothing partial is returned.
pub fn analyze(source: &dyn DatasetSource) -> Result<ConnectionMap> {
    info!(source = %source.describe(), "analyzing router locations");
    let data = source.load()?;
    connections::build(&data)
}

/// Writes the report lines, or a single `Error: <message>` line when the run
/// failed. Only write failures on `out` are returned.
pub fn run(source: &dyn DatasetSource, out: &mut dyn Write) -> io::Result<()> {
    match analyze(source) {
        Ok(map) => {
            for line in report::report(&map) {
                writeln!(out, "{line}")?;
            }
        }
        Err(e) => {
            warn!(error = ?e, "analysis failed");
            writeln!(out, "Error: {e}")?;
        }
    }
    Ok(())
}
