//! # Pools Common
//!
//! Shared models for the pool usage analyzer.
//!
//! * **[`network`]**: addresses, leases, ranges and shared networks.
//! * **[`config`]**: run configuration handed from the command line to the core.
//! * **[`error`]**: the error type used by every library crate.

pub mod config;
pub mod error;
pub mod network;
