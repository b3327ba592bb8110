//! Human-facing output on stderr: banner, step spinner, summary tables and
//! the error report. Machine-readable results never pass through here.

mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::{print_bond_summary, print_mass_summary, print_structure_info};

/// Output mode for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Draw the banner, spinner and summary tables.
    pub interactive: bool,
}

impl Context {
    /// Interactive only when stderr is a terminal and `--quiet` is off, so
    /// redirected runs and scripts see nothing but results and errors.
    pub fn for_invocation(quiet: bool) -> Self {
        Self::resolve(crate::io::stderr_is_tty(), quiet)
    }

    fn resolve(stderr_tty: bool, quiet: bool) -> Self {
        Self {
            interactive: stderr_tty && !quiet,
        }
    }
}
