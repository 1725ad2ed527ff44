//! # dhcpd-pools core
//!
//! Reads an ISC DHCP server configuration and its lease file, then works out
//! how full every configured range and shared network is.
//!
//! [`perform_analysis`] runs the whole pipeline. The pieces are public for
//! callers that want to drive it step by step.

pub mod analyze;
pub mod context;
pub mod parser;
pub mod sort;

use pools_common::config::Config;
use pools_common::error::Result;
use tracing::debug;

use crate::context::RunContext;
use crate::parser::{ConfigScanner, LeaseFileScanner};

/// Scans both input files, counts the leases and orders the ranges.
///
/// Sort keys are checked before any file is opened so a typo fails fast.
pub fn perform_analysis(cfg: &Config) -> Result<RunContext> {
    let keys = sort::parse_sort_keys(&cfg.sort)?;
    let mut ctx = RunContext::new();

    ConfigScanner::new(&mut ctx).scan_file(&cfg.config_file)?;
    debug!(
        "Configuration has {} ranges in {} shared networks",
        ctx.ranges().len(),
        ctx.shared_networks().named().count()
    );

    LeaseFileScanner::new(&mut ctx, cfg.retain_hardware).scan_file(&cfg.lease_file)?;
    analyze::aggregate(&mut ctx);

    let family = ctx.family_or_default();
    if !keys.is_empty() {
        sort::rank(&mut ctx.ranges, &keys, &ctx.networks, family);
    }
    if cfg.reverse {
        sort::reverse(&mut ctx.ranges);
    }

    Ok(ctx)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
