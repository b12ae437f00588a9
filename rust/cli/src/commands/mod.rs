//! One module per subcommand. Handlers write to the streams they are given
//! and report failure through [`CliError`](crate::CliError).

mod cfg;
mod deal;
mod eval;
mod replay;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use replay::handle_replay_command;
pub use sim::{handle_sim_command, SimOptions};
