//! End-to-end checks of the analysis pipeline over real files on disk.

#[cfg(test)]
mod analysis;
#[cfg(test)]
mod util;
