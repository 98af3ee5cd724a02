use clap::{Parser, ValueEnum};
use script_harvest::UrlResolution;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "script-harvest")]
#[command(about = "Saves the root page and JavaScript of every site in a list")]
#[command(version)]
pub struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CSV file with one site per row (domain in the second column)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory receiving one subdirectory per site
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of sites to process (0 = all)
    #[arg(short = 'n', long)]
    pub max_sites: Option<usize>,

    /// User-Agent header for root-page requests
    #[arg(long)]
    pub user_agent: Option<String>,

    /// How script `src` attributes are turned into URLs
    #[arg(long, value_enum)]
    pub resolution: Option<ResolutionArg>,

    /// Per-request timeout in seconds (0 = none)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Write an inline file for every script tag, even one with no body or src
    #[arg(long)]
    pub keep_empty_inline: bool,

    /// Write the batch report as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResolutionArg {
    /// Append non-https sources to the site URL as plain text
    Naive,
    /// Resolve sources as proper URL references
    Join,
}

impl From<ResolutionArg> for UrlResolution {
    fn from(arg: ResolutionArg) -> Self {
        match arg {
            ResolutionArg::Naive => UrlResolution::Naive,
            ResolutionArg::Join => UrlResolution::Join,
        }
    }
}
