use std::path::PathBuf;
use std::str::FromStr;

use crate::error::PoolsError;

pub const DEFAULT_CONFIG_FILE: &str = "/etc/dhcpd.conf";
pub const DEFAULT_LEASE_FILE: &str = "/var/lib/dhcp/dhcpd.leases";

#[derive(Clone, Debug)]
pub struct Config {
    pub config_file: PathBuf,
    pub lease_file: PathBuf,
    /// Sort key characters, applied left to right as tie-breakers.
    ///
    /// Empty keeps the ranges in address order.
    pub sort: String,
    pub reverse: bool,
    /// Keeps the `hardware ethernet` value of each lease.
    ///
    /// Only worth the extra work when the report lists active leases.
    pub retain_hardware: bool,
    pub limit: OutputLimit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            lease_file: PathBuf::from(DEFAULT_LEASE_FILE),
            sort: String::new(),
            reverse: false,
            retain_hardware: false,
            limit: OutputLimit::default(),
        }
    }
}

/// The three parts of a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Ranges = 1,
    SharedNetworks = 2,
    Summary = 4,
}

/// Which report sections get a header and which get their rows printed.
///
/// Written as two octal digits, e.g. `77` (everything) or `04` (summary rows
/// without any headers).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputLimit {
    headers: u8,
    contents: u8,
}

impl OutputLimit {
    pub fn new(headers: u8, contents: u8) -> Self {
        Self {
            headers: headers & 0o7,
            contents: contents & 0o7,
        }
    }

    pub fn header(&self, section: Section) -> bool {
        self.headers & section as u8 != 0
    }

    pub fn contents(&self, section: Section) -> bool {
        self.contents & section as u8 != 0
    }
}

impl Default for OutputLimit {
    fn default() -> Self {
        Self::new(0o7, 0o7)
    }
}

impl FromStr for OutputLimit {
    type Err = PoolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u8> = s
            .chars()
            .map(|c| match c {
                '0'..='7' => Ok(c as u8 - b'0'),
                _ => Err(PoolsError::InvalidOutputLimit(s.to_string())),
            })
            .collect::<Result<_, _>>()?;

        match digits[..] {
            [headers, contents] => Ok(Self::new(headers, contents)),
            _ => Err(PoolsError::InvalidOutputLimit(s.to_string())),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_limit_default_shows_everything() {
        let limit = OutputLimit::default();
        for section in [Section::Ranges, Section::SharedNetworks, Section::Summary] {
            assert!(limit.header(section));
            assert!(limit.contents(section));
        }
    }

    #[test]
    fn test_output_limit_from_str() {
        let limit: OutputLimit = "14".parse().unwrap();
        assert!(limit.header(Section::Ranges));
        assert!(!limit.header(Section::SharedNetworks));
        assert!(!limit.header(Section::Summary));
        assert!(!limit.contents(Section::Ranges));
        assert!(limit.contents(Section::Summary));

        let limit: OutputLimit = "00".parse().unwrap();
        assert!(!limit.header(Section::Summary));
        assert!(!limit.contents(Section::Summary));
    }

    #[test]
    fn test_output_limit_rejects_bad_masks() {
        assert!("8".parse::<OutputLimit>().is_err());
        assert!("78".parse::<OutputLimit>().is_err());
        assert!("777".parse::<OutputLimit>().is_err());
        assert!("".parse::<OutputLimit>().is_err());
        assert!("a7".parse::<OutputLimit>().is_err());
        assert!(matches!(
            "9".parse::<OutputLimit>(),
            Err(PoolsError::InvalidOutputLimit(_))
        ));
    }
}
