//! Lists the bot strategies registered in `pitboss-ai`.

use crate::error::CliError;
use std::io::Write;

pub fn handle_strategies_command(out: &mut dyn Write) -> Result<(), CliError> {
    let width = pitboss_ai::registry()
        .iter()
        .map(|e| e.id.len())
        .max()
        .unwrap_or(0);
    for entry in pitboss_ai::registry() {
        writeln!(out, "{:<width$}  {}", entry.id, entry.description, width = width)?;
    }
    Ok(())
}
