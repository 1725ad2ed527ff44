//! # Range Model
//!
//! A `range` statement of the server configuration: an inclusive pool of
//! addresses belonging to one shared network, plus the lease counters the
//! analysis fills in.

use crate::network::address::{Address, AddressFamily};
use crate::network::lease::LeaseState;
use crate::network::shared::NetworkId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub first: Address,
    pub last: Address,
    pub network: NetworkId,
    /// Active leases.
    pub count: u64,
    /// Free, abandoned, expired and released leases.
    pub touched: u64,
    pub backups: u64,
}

impl Range {
    /// Creates an empty range, swapping the bounds if they were written backwards.
    pub fn new(first: Address, last: Address, network: NetworkId) -> Self {
        let (first, last) = if last < first { (last, first) } else { (first, last) };
        Self {
            first,
            last,
            network,
            count: 0,
            touched: 0,
            backups: 0,
        }
    }

    pub fn single(addr: Address, network: NetworkId) -> Self {
        Self::new(addr, addr, network)
    }

    pub fn span_size(&self, family: &dyn AddressFamily) -> u128 {
        family.span_size(self.first, self.last)
    }

    pub fn contains(&self, addr: Address) -> bool {
        self.first <= addr && addr <= self.last
    }

    pub fn record(&mut self, state: LeaseState) {
        match state {
            LeaseState::Active => self.count += 1,
            LeaseState::FreeLike => self.touched += 1,
            LeaseState::Backup => self.backups += 1,
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
