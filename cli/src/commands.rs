use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use pools_common::config::{Config, DEFAULT_CONFIG_FILE, DEFAULT_LEASE_FILE, OutputLimit};

#[derive(Parser)]
#[command(name = "dhcpd-pools")]
#[command(about = "ISC dhcpd pool usage analyzer.")]
#[command(version)]
pub struct CommandLine {
    /// Path to the dhcpd configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Path to the dhcpd lease file
    #[arg(short = 'l', long = "leases", value_name = "FILE", default_value = DEFAULT_LEASE_FILE)]
    pub leases: PathBuf,

    /// Report format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Sort keys, applied left to right: n name, i ip, m max, c current,
    /// p percent, t touched, T touched + current, e touched + current percent
    #[arg(short = 's', long = "sort", value_name = "KEYS")]
    pub sort: Option<String>,

    /// Reverse the order of the ranges
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Write the report to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Two octal digits: sections with a header, sections with contents
    /// (1 ranges, 2 shared networks, 4 summary)
    #[arg(short = 'L', long = "limit", value_name = "MASK", default_value = "77")]
    pub limit: OutputLimit,

    /// List active leases with their hardware addresses (json only)
    #[arg(short = 'a', long = "active-leases")]
    pub active_leases: bool,

    /// Increase log verbosity, repeat for more
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Csv,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            config_file: self.config.clone(),
            lease_file: self.leases.clone(),
            sort: self.sort.clone().unwrap_or_default(),
            reverse: self.reverse,
            retain_hardware: self.active_leases,
            limit: self.limit,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
