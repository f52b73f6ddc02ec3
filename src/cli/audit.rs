//! Budget history CLI command

use crate::audit::AuditLog;
use crate::config::Settings;
use crate::display::format_history;
use crate::error::EconomeResult;

/// Print the most recent history records, oldest first
pub fn handle_audit_command(
    log: &AuditLog,
    settings: &Settings,
    profile: Option<&str>,
    limit: usize,
) -> EconomeResult<()> {
    let records = log.recent(limit, profile)?;
    print!("{}", format_history(&records, &settings.currency_symbol));
    if records.is_empty() {
        println!();
    }
    Ok(())
}
