use crate::error::{PoolsError, Result};
use crate::network::lease::LeaseState;

/// Upper bound on `shared-network` blocks in one configuration, default included.
pub const MAX_SHARED_NETWORKS: usize = 1024;

pub const DEFAULT_NETWORK_NAME: &str = "All networks";

/// Position of a [`SharedNetwork`] inside [`SharedNetworks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NetworkId(usize);

impl NetworkId {
    /// Bucket for ranges declared outside of any `shared-network` block.
    pub const DEFAULT: NetworkId = NetworkId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedNetwork {
    pub name: String,
    /// Sum of the sizes of every range in the network.
    pub available: u128,
    pub used: u64,
    pub touched: u64,
    pub backups: u64,
}

impl SharedNetwork {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: 0,
            used: 0,
            touched: 0,
            backups: 0,
        }
    }

    /// Zeroes every counter, keeping the name.
    pub fn reset(&mut self) {
        self.available = 0;
        self.used = 0;
        self.touched = 0;
        self.backups = 0;
    }

    pub fn record(&mut self, state: LeaseState) {
        match state {
            LeaseState::Active => self.used += 1,
            LeaseState::FreeLike => self.touched += 1,
            LeaseState::Backup => self.backups += 1,
        }
    }
}

/// Shared networks in the order the configuration declares them.
///
/// Index 0 always holds the default network.
#[derive(Debug, Clone)]
pub struct SharedNetworks {
    networks: Vec<SharedNetwork>,
}

impl SharedNetworks {
    pub fn new() -> Self {
        Self {
            networks: vec![SharedNetwork::new(DEFAULT_NETWORK_NAME)],
        }
    }

    pub fn add(&mut self, name: impl Into<String>) -> Result<NetworkId> {
        if self.networks.len() >= MAX_SHARED_NETWORKS {
            return Err(PoolsError::TooManySharedNetworks(MAX_SHARED_NETWORKS));
        }
        self.networks.push(SharedNetwork::new(name));
        Ok(NetworkId(self.networks.len() - 1))
    }

    pub fn get(&self, id: NetworkId) -> &SharedNetwork {
        &self.networks[id.0]
    }

    pub fn get_mut(&mut self, id: NetworkId) -> &mut SharedNetwork {
        &mut self.networks[id.0]
    }

    pub fn default_network(&self) -> &SharedNetwork {
        &self.networks[NetworkId::DEFAULT.0]
    }

    /// Every network, default first.
    pub fn iter(&self) -> impl Iterator<Item = &SharedNetwork> {
        self.networks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SharedNetwork> {
        self.networks.iter_mut()
    }

    /// Networks declared with a `shared-network` block.
    pub fn named(&self) -> impl Iterator<Item = &SharedNetwork> {
        self.networks.iter().skip(1)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl Default for SharedNetworks {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_network_is_first() {
        let networks = SharedNetworks::new();
        assert_eq!(networks.len(), 1);
        assert_eq!(networks.default_network().name, DEFAULT_NETWORK_NAME);
        assert_eq!(networks.get(NetworkId::DEFAULT).name, DEFAULT_NETWORK_NAME);
        assert_eq!(networks.named().count(), 0);
    }

    #[test]
    fn test_add_keeps_declaration_order() {
        let mut networks = SharedNetworks::new();
        let dsl = networks.add("DSL").unwrap();
        let cable = networks.add("cable").unwrap();

        assert_eq!(dsl.index(), 1);
        assert_eq!(cable.index(), 2);
        let names: Vec<&str> = networks.named().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["DSL", "cable"]);
    }

    #[test]
    fn test_add_past_capacity_fails() {
        let mut networks = SharedNetworks::new();
        for i in 1..MAX_SHARED_NETWORKS {
            networks.add(format!("net{i}")).unwrap();
        }
        assert!(matches!(
            networks.add("one too many"),
            Err(PoolsError::TooManySharedNetworks(MAX_SHARED_NETWORKS))
        ));
    }

    #[test]
    fn test_record_by_state() {
        let mut network = SharedNetwork::new("lab");
        network.record(LeaseState::Active);
        network.record(LeaseState::Active);
        network.record(LeaseState::FreeLike);
        network.record(LeaseState::Backup);

        assert_eq!((network.used, network.touched, network.backups), (2, 1, 1));
        assert_eq!(network.available, 0);
    }

    #[test]
    fn test_reset_keeps_name() {
        let mut network = SharedNetwork::new("lab");
        network.available = 10;
        network.record(LeaseState::Active);
        network.reset();

        assert_eq!(network, SharedNetwork::new("lab"));
    }
}
