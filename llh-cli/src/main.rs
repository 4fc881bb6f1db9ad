//! llh_to_ecef: convert one geodetic position to ECEF coordinates
//!
//! Usage: llh_to_ecef lat_deg lon_deg _hae_km

mod cli;
mod output;

use std::io;

use anyhow::Context;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = match cli::read_invocation(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) if err.is_usage() => {
            debug!("wrong number of arguments, nothing to convert");
            println!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let llh = cli.position().context("failed to read geodetic position")?;
    debug!(?llh, "converting");

    let ecef = llh.to_ecef();
    debug!(x = ecef.x, y = ecef.y, z = ecef.z, "ecef km");

    output::write_ecef(&mut io::stdout().lock(), &ecef).context("failed to write result")?;
    Ok(())
}

/// Log to stderr so stdout only ever carries the result lines.
/// Level comes from `RUST_LOG`, `warn` if unset.
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}
