//! Readers for the two input files.
//!
//! * [`config::ConfigScanner`] walks the server configuration character by
//!   character and collects ranges and shared networks.
//! * [`leases::LeaseFileScanner`] walks the lease file line by line and fills
//!   the lease index.
//!
//! Both write into the same [`crate::context::RunContext`] and can run in
//! either order.

pub mod config;
pub mod leases;

pub use config::ConfigScanner;
pub use leases::LeaseFileScanner;
