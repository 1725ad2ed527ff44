use std::io;
use std::path::PathBuf;

/// Failures that stop an analysis run.
///
/// Malformed data inside the input files is not represented here: the scanners
/// skip what they cannot read and carry on.
#[derive(Debug, thiserror::Error)]
pub enum PoolsError {
    /// The text is not an address of the family this run is using.
    #[error("invalid address: `{0}`")]
    InvalidAddress(String),
    /// A sort key character outside of `nimcptTe`.
    #[error("unknown sort key `{0}`")]
    UnknownSortKey(char),
    #[error("too many shared networks, at most {0} are supported")]
    TooManySharedNetworks(usize),
    #[error("include nesting deeper than {depth} levels at {}", .path.display())]
    IncludeTooDeep { path: PathBuf, depth: usize },
    #[error("output limit mask `{0}` is illegal")]
    InvalidOutputLimit(String),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PoolsError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PoolsError>;
