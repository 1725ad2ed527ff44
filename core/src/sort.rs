//! # Range Ranking
//!
//! Orders the report rows. The user gives a string of single-character keys;
//! the first key decides, later keys only break ties, and rows that tie on
//! every key keep the order they had.

use std::cmp::Ordering;

use pools_common::error::{PoolsError, Result};
use pools_common::network::address::AddressFamily;
use pools_common::network::range::Range;
use pools_common::network::shared::SharedNetworks;
use tracing::warn;

pub const MAX_SORT_KEYS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// `n`: shared network name.
    Name,
    /// `i`: first address.
    Ip,
    /// `m`: range size.
    Max,
    /// `c`: active leases.
    Current,
    /// `p`: active leases over range size.
    Percent,
    /// `t`: touched leases.
    Touched,
    /// `T`: touched plus active.
    TouchedCurrent,
    /// `e`: touched plus active over range size.
    TouchedCurrentPercent,
}

impl TryFrom<char> for SortKey {
    type Error = PoolsError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'n' => Ok(SortKey::Name),
            'i' => Ok(SortKey::Ip),
            'm' => Ok(SortKey::Max),
            'c' => Ok(SortKey::Current),
            'p' => Ok(SortKey::Percent),
            't' => Ok(SortKey::Touched),
            'T' => Ok(SortKey::TouchedCurrent),
            'e' => Ok(SortKey::TouchedCurrentPercent),
            other => Err(PoolsError::UnknownSortKey(other)),
        }
    }
}

impl SortKey {
    pub fn compare(
        self,
        a: &Range,
        b: &Range,
        networks: &SharedNetworks,
        family: &dyn AddressFamily,
    ) -> Ordering {
        match self {
            SortKey::Name => networks.get(a.network).name.cmp(&networks.get(b.network).name),
            SortKey::Ip => family.compare(a.first, b.first),
            SortKey::Max => a.span_size(family).cmp(&b.span_size(family)),
            SortKey::Current => a.count.cmp(&b.count),
            SortKey::Percent => ratio(a.count, a, family).total_cmp(&ratio(b.count, b, family)),
            SortKey::Touched => a.touched.cmp(&b.touched),
            SortKey::TouchedCurrent => (a.touched + a.count).cmp(&(b.touched + b.count)),
            SortKey::TouchedCurrentPercent => ratio(a.touched + a.count, a, family)
                .total_cmp(&ratio(b.touched + b.count, b, family)),
        }
    }
}

fn ratio(part: u64, range: &Range, family: &dyn AddressFamily) -> f64 {
    part as f64 / range.span_size(family) as f64
}

pub fn select_comparator(key: char) -> Result<SortKey> {
    SortKey::try_from(key)
}

/// Parses a key string such as `"pm"`. Keys past the fifth are dropped.
pub fn parse_sort_keys(keys: &str) -> Result<Vec<SortKey>> {
    let count = keys.chars().count();
    if count > MAX_SORT_KEYS {
        warn!("Only the first {MAX_SORT_KEYS} of {count} sort keys are used");
    }

    keys.chars()
        .take(MAX_SORT_KEYS)
        .map(select_comparator)
        .collect()
}

/// Stable ascending sort using `keys` as successive tie-breakers.
pub fn rank(
    ranges: &mut [Range],
    keys: &[SortKey],
    networks: &SharedNetworks,
    family: &dyn AddressFamily,
) {
    ranges.sort_by(|a, b| {
        keys.iter()
            .map(|key| key.compare(a, b, networks, family))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

pub fn reverse(ranges: &mut [Range]) {
    ranges.reverse();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
