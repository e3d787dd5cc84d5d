use clap::Parser;
use release_radar::application::dto::OutputFormat;
use std::path::PathBuf;

/// Report the closest upcoming GA releases for a list of operators
///
/// Operators are mapped to product suites by a tab-separated mapping table and
/// matched against a release-schedule CSV export.
#[derive(Parser, Debug, Default)]
#[command(name = "release-radar")]
#[command(version)]
#[command(about = "Report the closest upcoming GA releases for a list of operators", long_about = None)]
pub struct Args {
    /// Release-schedule CSV export (auto-discovered when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Directory searched for the export when --export is not given
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Operator mapping table [default: source.txt]
    #[arg(short, long, value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Version reference file [default: reference.txt]
    #[arg(short, long, value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format: text, markdown or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Do not read the reference file; keep every release version
    #[arg(long)]
    pub no_version_filter: bool,

    /// Show every matched release instead of the closest upcoming ones
    #[arg(short = 'a', long)]
    pub show_all: bool,

    /// Number of upcoming releases reported per product [default: 2]
    #[arg(short = 'k', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub closest: Option<u32>,

    /// Path to a config file (default: release-radar.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parses the command line, returning clap's error instead of exiting.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
