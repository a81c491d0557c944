//! Statistics command

use crate::error::Result;
use crate::output::print_stats;
use crate::stats::Player;
use std::io::Write;

/// Print the player's statistics without starting a game
///
/// # Errors
/// Returns an I/O error from the writer.
pub fn run_stats(player: &Player, mut out: impl Write) -> Result<()> {
    print_stats(&mut out, player)?;
    Ok(())
}
