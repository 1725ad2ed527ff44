//! # Report Output
//!
//! Turns a finished analysis into one of the report formats. Every renderer
//! writes to any [`Write`], so the same code serves stdout, files and tests.

pub mod csv;
pub mod json;
pub mod text;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use pools_common::config::OutputLimit;
use pools_common::network::range::Range;
use pools_common::network::shared::SharedNetwork;
use pools_core::context::RunContext;

use crate::commands::Format;
use crate::terminal;

/// What a renderer gets to see.
pub struct Report<'a> {
    pub ctx: &'a RunContext,
    pub limit: OutputLimit,
    pub active_leases: bool,
}

/// The numbers every report row shows, whether it is a range or a network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Usage {
    pub max: u128,
    pub current: u64,
    pub touched: u64,
    pub backups: u64,
}

impl Usage {
    pub fn of_range(ctx: &RunContext, range: &Range) -> Self {
        Self {
            max: ctx.span_size(range),
            current: range.count,
            touched: range.touched,
            backups: range.backups,
        }
    }

    pub fn of_network(network: &SharedNetwork) -> Self {
        Self {
            max: network.available,
            current: network.used,
            touched: network.touched,
            backups: network.backups,
        }
    }

    pub fn touched_current(&self) -> u64 {
        self.touched + self.current
    }

    pub fn free(&self) -> u128 {
        self.max.saturating_sub(u128::from(self.current))
    }

    pub fn percent(&self) -> f64 {
        percent(self.current, self.max)
    }

    pub fn touched_current_percent(&self) -> f64 {
        percent(self.touched_current(), self.max)
    }

    pub fn backup_percent(&self) -> f64 {
        percent(self.backups, self.max)
    }
}

/// `part` as a percentage of `whole`, 0 when there is nothing to divide by.
pub fn percent(part: u64, whole: u128) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}

/// Writes the report to `output`, or to stdout when there is none.
pub fn render(report: &Report<'_>, format: Format, output: Option<&Path>) -> anyhow::Result<()> {
    let mut out: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create report file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let colors = terminal::use_colors(output.is_some());
    match format {
        Format::Text => text::write(&mut out, report, colors),
        Format::Csv => csv::write(&mut out, report),
        Format::Json => json::write(&mut out, report),
    }
    .context("failed to write report")?;

    out.flush().context("failed to write report")?;
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
