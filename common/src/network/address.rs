//! # Address Model
//!
//! Addresses are stored as a plain 128-bit integer. IPv4 addresses occupy the
//! low 32 bits, so both families order numerically, which for IPv6 is the same
//! as comparing the big-endian octets.
//!
//! Reading and printing depends on the family. A run uses exactly one family,
//! picked by [`detect`] from the first address it meets and kept as a
//! `&'static dyn AddressFamily` handle afterwards.

use std::cmp::Ordering;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u128);

impl Address {
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u128 {
        self.0
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self(u32::from(ip) as u128)
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Self(u128::from(ip))
    }
}

/// Text conversion and arithmetic for one address family.
pub trait AddressFamily: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn parse(&self, text: &str) -> Option<Address>;

    fn format(&self, addr: Address) -> String;

    /// Widest text form, used to line up report columns.
    fn text_width(&self) -> usize;

    fn compare(&self, a: Address, b: Address) -> Ordering {
        a.cmp(&b)
    }

    /// Number of addresses in `first..=last`.
    ///
    /// Saturates at `u128::MAX` for the one span that does not fit, the whole
    /// IPv6 space.
    fn span_size(&self, first: Address, last: Address) -> u128 {
        last.to_bits()
            .saturating_sub(first.to_bits())
            .saturating_add(1)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ipv4Family;

#[derive(Debug, Clone, Copy)]
pub struct Ipv6Family;

pub static IPV4: Ipv4Family = Ipv4Family;
pub static IPV6: Ipv6Family = Ipv6Family;

impl AddressFamily for Ipv4Family {
    fn name(&self) -> &'static str {
        "IPv4"
    }

    fn parse(&self, text: &str) -> Option<Address> {
        text.parse::<Ipv4Addr>().ok().map(Address::from)
    }

    fn format(&self, addr: Address) -> String {
        Ipv4Addr::from(addr.to_bits() as u32).to_string()
    }

    fn text_width(&self) -> usize {
        16
    }
}

impl AddressFamily for Ipv6Family {
    fn name(&self) -> &'static str {
        "IPv6"
    }

    fn parse(&self, text: &str) -> Option<Address> {
        text.parse::<Ipv6Addr>().ok().map(Address::from)
    }

    fn format(&self, addr: Address) -> String {
        Ipv6Addr::from(addr.to_bits()).to_string()
    }

    fn text_width(&self) -> usize {
        39
    }
}

/// Finds the family `text` belongs to and parses it.
///
/// Dotted quads win over colon-hex, so `::ffff:10.0.0.1` style text only
/// matches IPv6.
pub fn detect(text: &str) -> Option<(&'static dyn AddressFamily, Address)> {
    let ipv4: &'static dyn AddressFamily = &IPV4;
    if let Some(addr) = ipv4.parse(text) {
        return Some((ipv4, addr));
    }
    let ipv6: &'static dyn AddressFamily = &IPV6;
    ipv6.parse(text).map(|addr| (ipv6, addr))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
