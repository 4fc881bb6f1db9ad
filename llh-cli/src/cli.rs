//! CLI argument definitions for llh_to_ecef

use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use llh_core::{LlhCoord, LlhError, Result};

/// Program name used in the usage line when argv[0] is missing or unreadable
pub const DEFAULT_PROGRAM: &str = "llh_to_ecef";

/// Exactly three positionals and no flags, so any hyphen-prefixed token is a value
#[derive(Parser, Debug)]
#[command(name = "llh_to_ecef")]
#[command(about = "Convert a geodetic position (LLH) to ECEF coordinates in km")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Geodetic latitude in degrees
    #[arg(allow_hyphen_values = true)]
    pub lat_deg: String,

    /// Geodetic longitude in degrees
    #[arg(allow_hyphen_values = true)]
    pub lon_deg: String,

    /// Height above the reference ellipsoid in km
    #[arg(allow_hyphen_values = true)]
    pub hae_km: String,
}

impl Cli {
    /// Parse the positional arguments into a geodetic position
    pub fn position(&self) -> Result<LlhCoord> {
        LlhCoord::parse(&self.lat_deg, &self.lon_deg, &self.hae_km)
    }
}

/// Read the command line, mapping a wrong argument count to `LlhError::Usage`.
///
/// Numeric parsing is deferred to [`Cli::position`] so the count check always comes first.
pub fn read_invocation<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    Cli::try_parse_from(&args).map_err(|_| LlhError::Usage {
        program: program_name(args.first()),
    })
}

fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|a| Path::new(a).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_PROGRAM)
        .to_string()
}
