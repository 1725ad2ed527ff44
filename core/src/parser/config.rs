use std::fs;
use std::mem;
use std::path::Path;

use pools_common::error::{PoolsError, Result};
use pools_common::network::address::Address;
use pools_common::network::range::Range;
use pools_common::network::shared::NetworkId;
use tracing::{debug, warn};

use crate::context::RunContext;

/// Words longer than this are never anything the scanner looks for.
const MAX_WORD_LEN: usize = 1024;

pub const MAX_INCLUDE_DEPTH: usize = 32;

/// Statement keywords the scanner reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    Range,
    SharedNetwork,
    Include,
    Other,
}

impl Clause {
    /// Substring match, so `range6` counts as `range`.
    fn classify(word: &str) -> Self {
        if word.contains("range") {
            Clause::Range
        } else if word.contains("shared-network") {
            Clause::SharedNetwork
        } else if word.contains("include") {
            Clause::Include
        } else {
            Clause::Other
        }
    }
}

/// What the next complete word means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Keyword,
    /// Remaining words of a statement nobody cares about.
    Skip,
    NetworkName,
    IncludePath,
    RangeFirst,
    RangeLast(Address),
}

/// Scanner state for one file. Includes get their own.
struct FileState {
    expect: Expect,
    word: String,
    overlong: bool,
    comment: bool,
    quoted: bool,
    depth: usize,
    base: NetworkId,
    /// Open `shared-network` blocks with the brace depth of their body.
    open: Vec<(usize, NetworkId)>,
    /// Declared network waiting for its opening brace.
    pending: Option<NetworkId>,
}

impl FileState {
    fn new(base: NetworkId) -> Self {
        Self {
            expect: Expect::Keyword,
            word: String::new(),
            overlong: false,
            comment: false,
            quoted: false,
            depth: 0,
            base,
            open: Vec::new(),
            pending: None,
        }
    }

    fn current(&self) -> NetworkId {
        self.open.last().map(|&(_, id)| id).unwrap_or(self.base)
    }

    fn push(&mut self, c: char) {
        if self.word.len() >= MAX_WORD_LEN {
            self.overlong = true;
        } else {
            self.word.push(c);
        }
    }
}

/// Collects `range`, `shared-network` and `include` statements from a server configuration.
///
/// Everything else in the file is skipped. Broken statements are dropped and
/// scanning goes on; only unreadable files and structural limits are errors.
pub struct ConfigScanner<'a> {
    ctx: &'a mut RunContext,
}

impl<'a> ConfigScanner<'a> {
    pub fn new(ctx: &'a mut RunContext) -> Self {
        Self { ctx }
    }

    pub fn scan_file(&mut self, path: &Path) -> Result<()> {
        self.scan_include(path, NetworkId::DEFAULT, 0)
    }

    pub fn scan_str(&mut self, input: &str) -> Result<()> {
        self.scan(input, NetworkId::DEFAULT, 0)
    }

    fn scan_include(&mut self, path: &Path, network: NetworkId, depth: usize) -> Result<()> {
        if depth > MAX_INCLUDE_DEPTH {
            return Err(PoolsError::IncludeTooDeep {
                path: path.to_path_buf(),
                depth: MAX_INCLUDE_DEPTH,
            });
        }

        debug!("Reading configuration {}", path.display());
        let bytes = fs::read(path).map_err(|e| PoolsError::io(path, e))?;
        self.scan(&String::from_utf8_lossy(&bytes), network, depth)
    }

    fn scan(&mut self, input: &str, network: NetworkId, depth: usize) -> Result<()> {
        let mut state = FileState::new(network);

        for c in input.chars() {
            self.step(&mut state, c, depth)?;
        }
        self.finish_word(&mut state, depth)?;

        if state.quoted || state.depth > 0 {
            debug!("Configuration ends inside a quote or block, ignoring");
        }
        Ok(())
    }

    fn step(&mut self, state: &mut FileState, c: char, depth: usize) -> Result<()> {
        if state.comment {
            if c == '\n' {
                state.comment = false;
            }
            return Ok(());
        }

        if state.quoted {
            if c == '"' {
                state.quoted = false;
            } else {
                state.push(c);
            }
            return Ok(());
        }

        match c {
            '#' => {
                self.finish_word(state, depth)?;
                state.comment = true;
            }
            '"' => state.quoted = true,
            ';' => {
                self.finish_word(state, depth)?;
                self.end_statement(state);
            }
            '{' => {
                self.finish_word(state, depth)?;
                state.depth += 1;
                if let Some(id) = state.pending.take() {
                    state.open.push((state.depth, id));
                }
                state.expect = Expect::Keyword;
            }
            '}' => {
                self.finish_word(state, depth)?;
                if state.open.last().is_some_and(|&(d, _)| d == state.depth) {
                    state.open.pop();
                }
                state.depth = state.depth.saturating_sub(1);
                state.pending = None;
                state.expect = Expect::Keyword;
            }
            c if c.is_whitespace() => self.finish_word(state, depth)?,
            c => state.push(c),
        }
        Ok(())
    }

    fn end_statement(&mut self, state: &mut FileState) {
        // `range 10.0.0.1;` is a pool of one.
        if let Expect::RangeLast(first) = state.expect {
            self.push_range(Range::single(first, state.current()));
        }
        state.pending = None;
        state.expect = Expect::Keyword;
    }

    fn finish_word(&mut self, state: &mut FileState, depth: usize) -> Result<()> {
        let overlong = mem::take(&mut state.overlong);
        if state.word.is_empty() {
            return Ok(());
        }
        let word = mem::take(&mut state.word);

        if overlong {
            debug!("Skipping overlong word in configuration");
            if state.expect == Expect::Keyword {
                state.expect = Expect::Skip;
            }
            return Ok(());
        }

        match state.expect {
            Expect::Keyword => {
                state.expect = match Clause::classify(&word) {
                    Clause::Range => Expect::RangeFirst,
                    Clause::SharedNetwork => Expect::NetworkName,
                    Clause::Include => Expect::IncludePath,
                    Clause::Other => Expect::Skip,
                };
            }
            Expect::Skip => {}
            Expect::NetworkName => {
                debug!("Found shared network {word}");
                state.pending = Some(self.ctx.networks.add(word)?);
                state.expect = Expect::Skip;
            }
            Expect::IncludePath => {
                state.expect = Expect::Skip;
                self.scan_include(Path::new(&word), state.current(), depth + 1)?;
            }
            Expect::RangeFirst => match self.ctx.parse_address(&word) {
                Ok(first) => state.expect = Expect::RangeLast(first),
                // Flag word in front of the addresses.
                Err(_) if word == "dynamic-bootp" => {}
                Err(e) => {
                    warn!("Skipping range: {e}");
                    state.expect = Expect::Skip;
                }
            },
            Expect::RangeLast(first) => {
                match self.ctx.parse_address(&word) {
                    Ok(last) => self.push_range(Range::new(first, last, state.current())),
                    Err(e) => warn!("Skipping range: {e}"),
                }
                state.expect = Expect::Skip;
            }
        }
        Ok(())
    }

    fn push_range(&mut self, range: Range) {
        debug!(
            "Found range {} - {}",
            self.ctx.format_address(range.first),
            self.ctx.format_address(range.last)
        );
        self.ctx.ranges.push(range);
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
