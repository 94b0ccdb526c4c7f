use clap::Parser;
use std::path::PathBuf;

use sqmean::types::OutputFormat;

#[derive(Parser)]
#[command(name = "sqmean", version, about = "SQMEAN CLI")]
pub struct CliArgs {
    /// Input file with whitespace-separated numbers
    pub numbers: PathBuf,

    /// Optional file with one weight per number
    #[arg(short, long)]
    pub weights: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
