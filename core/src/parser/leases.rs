use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pools_common::error::{PoolsError, Result};
use pools_common::network::address::Address;
use pools_common::network::lease::LeaseState;
use tracing::debug;

use crate::context::RunContext;

/// `xx:xx:xx:xx:xx:xx`
const MAC_TEXT_LEN: usize = 17;

/// What a single lease-file line means to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaseLine<'a> {
    /// `lease ADDR {` or `iaaddr ADDR {`.
    LeaseStart(&'a str),
    StateFree,
    StateAbandoned,
    StateExpired,
    StateReleased,
    StateActive,
    StateBackup,
    StateHardwareEthernet(&'a str),
    Unrecognized,
}

impl<'a> LeaseLine<'a> {
    /// Classifies a line by its leading words.
    ///
    /// Only lines whose first word is `lease`, `iaaddr`, `binding` or
    /// `hardware` matter, so `next binding state` and `rewind binding state`
    /// fall through to [`LeaseLine::Unrecognized`].
    pub fn classify(line: &'a str) -> Self {
        let mut words = line.split_whitespace();

        match words.next() {
            Some("lease") | Some("iaaddr") => match words.next() {
                Some(addr) => LeaseLine::LeaseStart(addr.trim_end_matches(['{', ';'])),
                None => LeaseLine::Unrecognized,
            },
            Some("binding") => {
                if words.next() != Some("state") {
                    return LeaseLine::Unrecognized;
                }
                match words.next().map(|w| w.trim_end_matches(';')) {
                    Some("free") => LeaseLine::StateFree,
                    Some("abandoned") => LeaseLine::StateAbandoned,
                    Some("expired") => LeaseLine::StateExpired,
                    Some("released") => LeaseLine::StateReleased,
                    Some("active") => LeaseLine::StateActive,
                    Some("backup") => LeaseLine::StateBackup,
                    _ => LeaseLine::Unrecognized,
                }
            }
            Some("hardware") => match (words.next(), words.next()) {
                (Some("ethernet"), Some(mac)) => LeaseLine::StateHardwareEthernet(mac),
                _ => LeaseLine::Unrecognized,
            },
            _ => LeaseLine::Unrecognized,
        }
    }

    /// The lease state a state line maps to.
    pub fn state(&self) -> Option<LeaseState> {
        match self {
            LeaseLine::StateFree
            | LeaseLine::StateAbandoned
            | LeaseLine::StateExpired
            | LeaseLine::StateReleased => Some(LeaseState::FreeLike),
            LeaseLine::StateActive => Some(LeaseState::Active),
            LeaseLine::StateBackup => Some(LeaseState::Backup),
            _ => None,
        }
    }
}

fn mac_text(field: &str) -> &str {
    let field = field.trim_end_matches(';');
    match field.char_indices().nth(MAC_TEXT_LEN) {
        Some((end, _)) => &field[..end],
        None => field,
    }
}

/// Feeds the states recorded in a lease file into the run's lease index.
pub struct LeaseFileScanner<'a> {
    ctx: &'a mut RunContext,
    retain_hardware: bool,
    current: Option<Address>,
}

impl<'a> LeaseFileScanner<'a> {
    pub fn new(ctx: &'a mut RunContext, retain_hardware: bool) -> Self {
        Self {
            ctx,
            retain_hardware,
            current: None,
        }
    }

    pub fn scan_file(&mut self, path: &Path) -> Result<()> {
        debug!("Reading leases {}", path.display());
        let file = File::open(path).map_err(|e| PoolsError::io(path, e))?;
        self.scan_reader(BufReader::new(file), path)
    }

    /// Scans any buffered source. `origin` only names it in errors.
    pub fn scan_reader<R: BufRead>(&mut self, mut reader: R, origin: &Path) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| PoolsError::io(origin, e))?;
            if read == 0 {
                break;
            }
            self.scan_line(&String::from_utf8_lossy(&buf));
        }

        debug!("Lease index holds {} addresses", self.ctx.leases.len());
        Ok(())
    }

    pub fn scan_str(&mut self, input: &str) {
        for line in input.lines() {
            self.scan_line(line);
        }
    }

    fn scan_line(&mut self, line: &str) {
        let line = LeaseLine::classify(line);

        match line {
            LeaseLine::LeaseStart(text) => {
                self.current = match self.ctx.parse_address(text) {
                    Ok(addr) => Some(addr),
                    Err(e) => {
                        debug!("Skipping lease block: {e}");
                        None
                    }
                };
            }
            LeaseLine::StateHardwareEthernet(field) => {
                if !self.retain_hardware {
                    return;
                }
                if let Some(addr) = self.current {
                    self.ctx.leases.set_hardware_address(addr, mac_text(field));
                }
            }
            LeaseLine::Unrecognized => {}
            state_line => {
                let (Some(addr), Some(state)) = (self.current, state_line.state()) else {
                    return;
                };
                if state == LeaseState::Backup {
                    self.ctx.backups_seen = true;
                }
                self.ctx.leases.upsert(addr, state);
            }
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
