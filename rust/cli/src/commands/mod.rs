//! Command handler modules for the `nines` CLI.
//!
//! Each subcommand lives in its own module and follows the same shape:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in so tests can capture them
//! - Errors propagated as [`CliError`](crate::error::CliError)

pub mod cfg;
pub mod deal;
pub mod rng;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use rng::handle_rng_command;
pub use sim::{SimArgs, handle_sim_command};
pub use stats::handle_stats_command;
