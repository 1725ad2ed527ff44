//! # Network Models
//!
//! * [`address::Address`]: a binary IPv4 or IPv6 address and the
//!   [`address::AddressFamily`] that knows how to read and print it.
//! * [`lease::LeaseIndex`]: every address seen in the lease file, with its latest state.
//! * [`range::Range`]: a configured address pool and its counters.
//! * [`shared::SharedNetworks`]: named groups of ranges, default group first.

pub mod address;
pub mod lease;
pub mod range;
pub mod shared;
