use std::io::{self, Write};

use pools_common::config::Section;
use pools_common::network::lease::LeaseState;
use serde::Serialize;

use super::{Report, Usage};

#[derive(Serialize)]
struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    active_leases: Option<Vec<ActiveLease>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnets: Option<Vec<Subnet>>,
    #[serde(rename = "shared-networks", skip_serializing_if = "Option::is_none")]
    shared_networks: Option<Vec<Location>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Location>,
}

#[derive(Serialize)]
struct ActiveLease {
    ip: String,
    macaddress: String,
}

#[derive(Serialize)]
struct Subnet {
    location: String,
    range: String,
    #[serde(flatten)]
    counts: Counts,
}

#[derive(Serialize)]
struct Location {
    location: String,
    #[serde(flatten)]
    counts: Counts,
}

#[derive(Serialize)]
struct Counts {
    defined: u128,
    used: u64,
    touched: u64,
    free: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    backup: Option<u64>,
}

impl Counts {
    fn new(usage: Usage, backups: bool) -> Self {
        Self {
            defined: usage.max,
            used: usage.current,
            touched: usage.touched,
            free: usage.free(),
            backup: backups.then_some(usage.backups),
        }
    }
}

fn build(report: &Report<'_>) -> JsonReport {
    let ctx = report.ctx;
    let limit = report.limit;
    let backups = ctx.backups_seen();

    let active_leases = report.active_leases.then(|| {
        ctx.leases()
            .iter()
            .filter(|lease| lease.state == LeaseState::Active)
            .map(|lease| ActiveLease {
                ip: ctx.format_address(lease.address),
                macaddress: lease.hardware_address.clone().unwrap_or_default(),
            })
            .collect()
    });

    let subnets = limit.contents(Section::Ranges).then(|| {
        ctx.ranges()
            .iter()
            .map(|range| Subnet {
                location: ctx.shared_networks().get(range.network).name.clone(),
                range: format!(
                    "{} - {}",
                    ctx.format_address(range.first),
                    ctx.format_address(range.last)
                ),
                counts: Counts::new(Usage::of_range(ctx, range), backups),
            })
            .collect()
    });

    let shared_networks = limit.contents(Section::SharedNetworks).then(|| {
        ctx.shared_networks()
            .named()
            .map(|network| Location {
                location: network.name.clone(),
                counts: Counts::new(Usage::of_network(network), backups),
            })
            .collect()
    });

    let summary = limit.contents(Section::Summary).then(|| {
        let total = ctx.all_networks();
        Location {
            location: total.name.clone(),
            counts: Counts::new(Usage::of_network(total), backups),
        }
    });

    JsonReport {
        active_leases,
        subnets,
        shared_networks,
        summary,
    }
}

/// One JSON document. Headers have no meaning here, only the contents digit of the limit counts.
pub fn write<W: Write>(out: &mut W, report: &Report<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &build(report))?;
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
