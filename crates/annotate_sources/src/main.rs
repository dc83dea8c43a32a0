use anyhow::Result;
use std::io;

use annotate_sources::{run_batch, AnnotatorConfig};

fn main() -> Result<()> {
    // Report lines go to stdout; diagnostics stay on stderr and are quiet
    // unless RUST_LOG asks for more.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AnnotatorConfig::default();
    log::debug!("Annotating {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_batch(&config, &mut out)?;

    // Per-file failures are already reported; the run itself always succeeds.
    Ok(())
}
