use std::io::{self, Write};

use pools_common::config::Section;

use super::{Report, Usage};

const RANGE_COLUMNS: &[&str] = &[
    "shared net name",
    "first ip",
    "last ip",
    "max",
    "cur",
    "percent",
    "touch",
    "t+c",
    "t+c perc",
];
const NETWORK_COLUMNS: &[&str] = &["name", "max", "cur", "percent", "touch", "t+c", "t+c perc"];
const BACKUP_COLUMNS: &[&str] = &["bu", "bu perc"];

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn write_record<W: Write>(out: &mut W, fields: &[String]) -> io::Result<()> {
    let quoted: Vec<String> = fields.iter().map(|f| quote(f)).collect();
    writeln!(out, "{}", quoted.join(","))
}

fn columns(names: &[&str], backups: bool) -> Vec<String> {
    let extra = if backups { BACKUP_COLUMNS } else { &[] };
    names.iter().chain(extra).map(|s| s.to_string()).collect()
}

fn usage_fields(usage: &Usage, backups: bool) -> Vec<String> {
    let mut fields = vec![
        usage.max.to_string(),
        usage.current.to_string(),
        format!("{:.3}", usage.percent()),
        usage.touched.to_string(),
        usage.touched_current().to_string(),
        format!("{:.3}", usage.touched_current_percent()),
    ];
    if backups {
        fields.push(usage.backups.to_string());
        fields.push(format!("{:.3}", usage.backup_percent()));
    }
    fields
}

/// Comma separated values, every field quoted.
pub fn write<W: Write>(out: &mut W, report: &Report<'_>) -> io::Result<()> {
    let ctx = report.ctx;
    let limit = report.limit;
    let backups = ctx.backups_seen();

    if limit.header(Section::Ranges) {
        write_record(out, &["Ranges:".to_string()])?;
        write_record(out, &columns(RANGE_COLUMNS, backups))?;
    }
    if limit.contents(Section::Ranges) {
        for range in ctx.ranges() {
            let mut fields = vec![
                ctx.shared_networks().get(range.network).name.clone(),
                ctx.format_address(range.first),
                ctx.format_address(range.last),
            ];
            fields.extend(usage_fields(&Usage::of_range(ctx, range), backups));
            write_record(out, &fields)?;
        }
        writeln!(out)?;
    }

    if limit.header(Section::SharedNetworks) {
        write_record(out, &["Shared networks:".to_string()])?;
        write_record(out, &columns(NETWORK_COLUMNS, backups))?;
    }
    if limit.contents(Section::SharedNetworks) {
        for network in ctx.shared_networks().named() {
            let mut fields = vec![network.name.clone()];
            fields.extend(usage_fields(&Usage::of_network(network), backups));
            write_record(out, &fields)?;
        }
        writeln!(out)?;
    }

    if limit.header(Section::Summary) {
        write_record(out, &["Sum of all ranges:".to_string()])?;
        write_record(out, &columns(NETWORK_COLUMNS, backups))?;
    }
    if limit.contents(Section::Summary) {
        let total = ctx.all_networks();
        let mut fields = vec![total.name.clone()];
        fields.extend(usage_fields(&Usage::of_network(total), backups));
        write_record(out, &fields)?;
    }

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
