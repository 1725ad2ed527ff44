//! # Aggregation
//!
//! Joins the configured ranges against the lease index. Every range counts
//! the leases that fall inside it, each shared network sums up its own
//! ranges, and a separate pass over the ranges builds the grand total.

use pools_common::network::address::AddressFamily;
use pools_common::network::lease::LeaseIndex;
use pools_common::network::range::Range;
use pools_common::network::shared::{DEFAULT_NETWORK_NAME, SharedNetwork, SharedNetworks};
use tracing::info;

use crate::context::RunContext;

/// Fills the counters of every range, every shared network and the grand total.
pub fn aggregate(ctx: &mut RunContext) {
    let family = ctx.family_or_default();
    let RunContext {
        ranges,
        networks,
        leases,
        totals,
        ..
    } = ctx;

    count_leases(ranges, networks, leases, family);
    *totals = all_networks(ranges, family);

    info!(
        "{} ranges, {} addresses, {} active, {} touched, {} backup",
        ranges.len(),
        totals.available,
        totals.used,
        totals.touched,
        totals.backups
    );
}

/// Counts leases into ranges and their shared networks.
///
/// Each range looks up its own slice of the lease index, so overlapping
/// ranges each see every lease inside their bounds exactly once.
pub fn count_leases(
    ranges: &mut [Range],
    networks: &mut SharedNetworks,
    leases: &LeaseIndex,
    family: &dyn AddressFamily,
) {
    for network in networks.iter_mut() {
        network.reset();
    }
    ranges.sort_by(|a, b| family.compare(a.first, b.first));

    for range in ranges.iter_mut() {
        range.count = 0;
        range.touched = 0;
        range.backups = 0;

        let network = networks.get_mut(range.network);
        for lease in leases.within(range.first, range.last) {
            range.record(lease.state);
            network.record(lease.state);
        }
        network.available = network.available.saturating_add(range.span_size(family));
    }
}

/// Sums every range into one record, ignoring which network it belongs to.
pub fn all_networks(ranges: &[Range], family: &dyn AddressFamily) -> SharedNetwork {
    ranges
        .iter()
        .fold(SharedNetwork::new(DEFAULT_NETWORK_NAME), |mut total, range| {
            total.available = total.available.saturating_add(range.span_size(family));
            total.used += range.count;
            total.touched += range.touched;
            total.backups += range.backups;
            total
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
