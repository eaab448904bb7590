//! Command dispatch: bridges CLI args -> pipeline calls -> output formatting.

pub mod config_cmd;
pub mod devices;
pub mod interfaces;
pub mod report;
pub mod util;

use catwatch_core::Controller;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    controller: &Controller,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Devices(args) => devices::handle(controller, args, global).await,
        Command::Interfaces(args) => interfaces::handle(controller, args, global).await,
        Command::Report(args) => report::handle(controller, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
