//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// Scholarsite - render a research homepage's data collections into page surfaces
#[derive(Parser, Debug, Default)]
#[command(name = "scholarsite")]
#[command(version)]
#[command(about = "Render a research homepage's news, teaching, publications, talks and research data", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Site root holding data/*.json: a directory or an http(s) base URL (default: data_root from site.conf, else .)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Page URL used to decide which links are external (default: remote data root, else http://localhost/)
    #[arg(long)]
    pub origin: Option<String>,

    /// HTML template whose element ids decide which surfaces exist (default: all surfaces)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Publication order: newest, oldest or title
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Search text applied to the teaching list after load
    #[arg(short, long)]
    pub query: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit plain text instead of HTML
    #[arg(long)]
    pub text: bool,

    /// Flip the stored light/dark preference before rendering
    #[arg(long)]
    pub toggle_theme: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Specify the configuration directory (default: ~/.config/scholarsite)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}
