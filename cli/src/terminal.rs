//! Everything that decides how the tool looks on a terminal.

pub mod colors;
pub mod logging;

/// Colors only make sense when a person reads the output.
pub fn use_colors(to_file: bool) -> bool {
    !to_file && console::Term::stdout().is_term() && console::colors_enabled()
}
