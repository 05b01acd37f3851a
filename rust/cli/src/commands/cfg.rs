//! Configuration command handler.
//!
//! Prints every setting with the layer it came from:
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "piles": { "value": 4, "source": "default" },
//!   "ai": { "value": "baseline", "source": "env" },
//!   "max_moves": { "value": 10000, "source": "file" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "piles": {
            "value": config.piles,
            "source": sources.piles,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        },
        "max_moves": {
            "value": config.max_moves,
            "source": sources.max_moves,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
