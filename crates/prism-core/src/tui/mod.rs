//! Interactive `prism init` prompts (cliclack)
//!
//! Only compiled with the `tui` feature.

#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use prompts::{run_init, InitArgs};
