use std::collections::BTreeMap;

use tracing::trace;

use crate::network::address::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaseState {
    Active,
    /// Free, abandoned, expired or released. Counted as "touched".
    FreeLike,
    /// Held for the failover peer.
    Backup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lease {
    pub address: Address,
    pub state: LeaseState,
    pub hardware_address: Option<String>,
}

impl Lease {
    pub fn new(address: Address, state: LeaseState) -> Self {
        Self {
            address,
            state,
            hardware_address: None,
        }
    }
}

/// Every address seen in a lease file, holding only its latest state.
///
/// Lease files are append-only logs, so one address can show up many times.
/// The entry read last is the one that counts.
#[derive(Debug, Default, Clone)]
pub struct LeaseIndex {
    leases: BTreeMap<Address, Lease>,
}

impl LeaseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `state` for `address`, dropping whatever was known about it before.
    pub fn upsert(&mut self, address: Address, state: LeaseState) {
        if let Some(old) = self.leases.remove(&address) {
            trace!("replacing {:?} lease with {:?}", old.state, state);
        }
        self.leases.insert(address, Lease::new(address, state));
    }

    /// Attaches a hardware address to the current entry of `address`, if there is one.
    pub fn set_hardware_address(&mut self, address: Address, mac: impl Into<String>) {
        if let Some(lease) = self.leases.get_mut(&address) {
            lease.hardware_address = Some(mac.into());
        }
    }

    pub fn get(&self, address: Address) -> Option<&Lease> {
        self.leases.get(&address)
    }

    /// All leases in ascending address order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Lease> + Clone {
        self.leases.values()
    }

    /// Leases with `first <= address <= last`, ascending.
    pub fn within(&self, first: Address, last: Address) -> impl Iterator<Item = &Lease> {
        // BTreeMap::range panics on an inverted range.
        let (low, high) = if first <= last { (first, last) } else { (last, first) };
        self.leases.range(low..=high).map(|(_, lease)| lease)
    }

    pub fn len(&self) -> usize {
        self.leases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leases.is_empty()
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
