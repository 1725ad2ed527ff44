use std::fs;
use std::path::{Path, PathBuf};

use pools_common::config::Config;
use pools_common::network::range::Range;
use pools_core::context::RunContext;
use tempfile::TempDir;

/// A configuration and a lease file in a scratch directory.
pub struct Fixture {
    pub dir: TempDir,
    pub config_file: PathBuf,
    pub lease_file: PathBuf,
}

impl Fixture {
    pub fn new(config: &str, leases: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("dhcpd.conf");
        let lease_file = dir.path().join("dhcpd.leases");
        fs::write(&config_file, config).unwrap();
        fs::write(&lease_file, leases).unwrap();

        Self {
            dir,
            config_file,
            lease_file,
        }
    }

    /// Writes an extra file next to the others and returns its path.
    pub fn add_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn config(&self) -> Config {
        Config {
            config_file: self.config_file.clone(),
            lease_file: self.lease_file.clone(),
            ..Config::default()
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

pub fn lease(addr: &str, state: &str) -> String {
    format!("lease {addr} {{\n  starts 4 2024/05/02 10:00:00;\n  binding state {state};\n  next binding state free;\n}}\n")
}

pub fn lease6(addr: &str, state: &str) -> String {
    format!("ia-na \"\\001\\000\" {{\n  cltt 4 2024/05/02 10:00:00;\n  iaaddr {addr} {{\n    binding state {state};\n  }}\n}}\n")
}

/// `(first, last, count, touched, backups)` of every range in report order.
pub fn summarize(ctx: &RunContext) -> Vec<(String, String, u64, u64, u64)> {
    ctx.ranges()
        .iter()
        .map(|r: &Range| {
            (
                ctx.format_address(r.first),
                ctx.format_address(r.last),
                r.count,
                r.touched,
                r.backups,
            )
        })
        .collect()
}

pub fn firsts(ctx: &RunContext) -> Vec<String> {
    ctx.ranges().iter().map(|r| ctx.format_address(r.first)).collect()
}
