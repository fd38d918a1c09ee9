//! Tape command implementation

use crate::checks::tape;
use crate::cli::args::{TapeArgs, TapeCommands};
use crate::commands::CheckPlan;
use crate::error::Result;

/// Build the check for a tape subcommand
pub fn plan_tape(args: &TapeArgs) -> Result<CheckPlan> {
    let (check, thresholds) = match &args.command {
        TapeCommands::Empty(t) => (tape::empty_tapes(), t),
        TapeCommands::InStorage(t) => (tape::tapes_in_storage(), t),
        TapeCommands::Expired(t) => (tape::expired_tapes(), t),
        TapeCommands::WillExpire { time, thresholds } => (tape::expiring_tapes(*time), thresholds),
        TapeCommands::Replace { mounts, thresholds } => (tape::replace_tapes(*mounts), thresholds),
    };

    Ok(CheckPlan::new(check, thresholds.thresholds()?))
}
