use std::io::{self, Write};

use colored::*;
use pools_common::config::Section;
use unicode_width::UnicodeWidthStr;

use super::{Report, Usage};
use crate::terminal::colors;

const NAME_WIDTH: usize = 20;
const RANGE_COLUMNS: &str = "  max   cur    percent  touch   t+c  t+c perc";
const NETWORK_COLUMNS: &str = "name                   max   cur     percent  touch    t+c  t+c perc";
const BACKUP_COLUMNS: &str = "     bu  bu perc";

/// Pads by display width, so wide characters in network names line up.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{text}{}", " ".repeat(fill))
}

struct Painter {
    enabled: bool,
}

impl Painter {
    fn paint(&self, text: String, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.color(colors::HEADER).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn percent(&self, value: f64, width: usize) -> String {
        self.paint(format!("{value:>width$.3}"), colors::usage(value))
    }
}

/// Plain text tables, one per section.
pub fn write<W: Write>(out: &mut W, report: &Report<'_>, use_colors: bool) -> io::Result<()> {
    let ctx = report.ctx;
    let limit = report.limit;
    let backups = ctx.backups_seen();
    let painter = Painter { enabled: use_colors };
    let width = ctx.family_or_default().text_width();

    if limit.header(Section::Ranges) {
        writeln!(out, "{}", painter.heading("Ranges:"))?;
        let mut columns = format!(
            "{}{}   {} {RANGE_COLUMNS}",
            pad("shared net name", NAME_WIDTH),
            pad("first ip", width),
            pad("last ip", width),
        );
        if backups {
            columns.push_str(BACKUP_COLUMNS);
        }
        writeln!(out, "{}", painter.heading(&columns))?;
    }
    if limit.contents(Section::Ranges) {
        for range in ctx.ranges() {
            let name = &ctx.shared_networks().get(range.network).name;
            let usage = Usage::of_range(ctx, range);
            write!(
                out,
                "{}{} - {} {:>5} {:>5} {}  {:>5} {:>5} {}",
                painter.paint(pad(name, NAME_WIDTH), colors::NAME),
                painter.paint(pad(&ctx.format_address(range.first), width), colors::ADDRESS),
                painter.paint(pad(&ctx.format_address(range.last), width), colors::ADDRESS),
                usage.max,
                usage.current,
                painter.percent(usage.percent(), 10),
                usage.touched,
                usage.touched_current(),
                painter.percent(usage.touched_current_percent(), 9),
            )?;
            if backups {
                write!(out, "{:>7} {:>8.3}", usage.backups, usage.backup_percent())?;
            }
            writeln!(out)?;
        }
    }

    if limit.contents(Section::Ranges) && limit.header(Section::SharedNetworks) {
        writeln!(out)?;
    }
    if limit.header(Section::SharedNetworks) {
        writeln!(out, "{}", painter.heading("Shared networks:"))?;
        network_columns(out, &painter, backups)?;
    }
    if limit.contents(Section::SharedNetworks) {
        for network in ctx.shared_networks().named() {
            network_row(out, &painter, &network.name, Usage::of_network(network), backups)?;
        }
    }

    if limit.contents(Section::SharedNetworks) && limit.header(Section::Summary) {
        writeln!(out)?;
    }
    if limit.header(Section::Summary) {
        writeln!(out, "{}", painter.heading("Sum of all ranges:"))?;
        network_columns(out, &painter, backups)?;
    }
    if limit.contents(Section::Summary) {
        let total = ctx.all_networks();
        network_row(out, &painter, &total.name, Usage::of_network(total), backups)?;
    }

    Ok(())
}

fn network_columns<W: Write>(out: &mut W, painter: &Painter, backups: bool) -> io::Result<()> {
    let mut columns = NETWORK_COLUMNS.to_string();
    if backups {
        columns.push_str(BACKUP_COLUMNS);
    }
    writeln!(out, "{}", painter.heading(&columns))
}

fn network_row<W: Write>(
    out: &mut W,
    painter: &Painter,
    name: &str,
    usage: Usage,
    backups: bool,
) -> io::Result<()> {
    write!(
        out,
        "{} {:>5} {:>5} {} {:>7} {:>6} {}",
        painter.paint(pad(name, NAME_WIDTH), colors::NAME),
        usage.max,
        usage.current,
        painter.percent(usage.percent(), 10),
        usage.touched,
        usage.touched_current(),
        painter.percent(usage.touched_current_percent(), 9),
    )?;
    if backups {
        write!(out, "{:>7} {:>8.3}", usage.backups, usage.backup_percent())?;
    }
    writeln!(out)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
