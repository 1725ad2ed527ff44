mod commands;
mod output;
mod terminal;

use anyhow::Context;
use commands::CommandLine;
use output::Report;
use terminal::logging;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.to_config();
    let ctx = pools_core::perform_analysis(&cfg).context("analysis failed")?;
    info!(
        "Analyzed {} ranges and {} leases",
        ctx.ranges().len(),
        ctx.leases().len()
    );

    let report = Report {
        ctx: &ctx,
        limit: cfg.limit,
        active_leases: commands.active_leases,
    };
    output::render(&report, commands.format, commands.output.as_deref())
}
