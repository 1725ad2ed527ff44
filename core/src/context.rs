//! # Run Context
//!
//! Everything one analysis run knows: the address family in use, the
//! configured ranges, the shared networks and the lease index.
//!
//! The family starts out unknown. The first text that parses as an address,
//! from either input file, decides it for the rest of the run.

use std::sync::OnceLock;

use pools_common::error::{PoolsError, Result};
use pools_common::network::address::{self, Address, AddressFamily, IPV4};
use pools_common::network::lease::LeaseIndex;
use pools_common::network::range::Range;
use pools_common::network::shared::{DEFAULT_NETWORK_NAME, SharedNetwork, SharedNetworks};
use tracing::debug;

const INITIAL_RANGES: usize = 64;

#[derive(Debug)]
pub struct RunContext {
    family: OnceLock<&'static dyn AddressFamily>,
    pub(crate) ranges: Vec<Range>,
    pub(crate) networks: SharedNetworks,
    pub(crate) leases: LeaseIndex,
    pub(crate) totals: SharedNetwork,
    pub(crate) backups_seen: bool,
}

impl RunContext {
    pub fn new() -> Self {
        Self {
            family: OnceLock::new(),
            ranges: Vec::with_capacity(INITIAL_RANGES),
            networks: SharedNetworks::new(),
            leases: LeaseIndex::new(),
            totals: SharedNetwork::new(DEFAULT_NETWORK_NAME),
            backups_seen: false,
        }
    }

    /// The family this run settled on, if any address has been seen yet.
    pub fn family(&self) -> Option<&'static dyn AddressFamily> {
        self.family.get().copied()
    }

    /// The settled family, or IPv4 for a run that never saw an address.
    pub fn family_or_default(&self) -> &'static dyn AddressFamily {
        self.family().unwrap_or(&IPV4)
    }

    /// Parses `text` with the run's family, settling the family on first success.
    pub fn parse_address(&self, text: &str) -> Result<Address> {
        if let Some(family) = self.family() {
            return family
                .parse(text)
                .ok_or_else(|| PoolsError::InvalidAddress(text.to_string()));
        }

        let (family, addr) =
            address::detect(text).ok_or_else(|| PoolsError::InvalidAddress(text.to_string()))?;
        if self.family.set(family).is_ok() {
            debug!("Using {} addressing", family.name());
        }
        Ok(addr)
    }

    pub fn format_address(&self, addr: Address) -> String {
        self.family_or_default().format(addr)
    }

    pub fn span_size(&self, range: &Range) -> u128 {
        range.span_size(self.family_or_default())
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// Shared networks in declaration order, the default network first.
    pub fn shared_networks(&self) -> &SharedNetworks {
        &self.networks
    }

    /// Grand total over every range, regardless of shared network.
    pub fn all_networks(&self) -> &SharedNetwork {
        &self.totals
    }

    pub fn leases(&self) -> &LeaseIndex {
        &self.leases
    }

    /// Whether the lease file had any lease in `backup` state.
    pub fn backups_seen(&self) -> bool {
        self.backups_seen
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
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
