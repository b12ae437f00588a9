//! `holdem cfg`: the resolved configuration as JSON.
//!
//! ```json
//! {
//!   "big_blind": { "value": 2, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "seed": { "value": config.seed, "source": sources.seed },
        "buy_in": { "value": config.buy_in, "source": sources.buy_in },
        "small_blind": { "value": config.small_blind, "source": sources.small_blind },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "action_timeout_secs": {
            "value": config.action_timeout_secs,
            "source": sources.action_timeout_secs,
        },
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}
