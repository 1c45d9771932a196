//! Roster cleanup ahead of scheduling

use std::collections::HashSet;

use crate::error::ScheduleError;

/// Trim names, drop blank entries and reject duplicates.
///
/// Order is preserved; it is the tie-break order for the scheduler and the
/// standings table.
pub fn normalize_roster<S: AsRef<str>>(names: &[S]) -> Result<Vec<String>, ScheduleError> {
    let mut seen = HashSet::with_capacity(names.len());
    let mut roster = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name) {
            return Err(ScheduleError::DuplicatePlayer(name.to_string()));
        }
        roster.push(name.to_string());
    }

    Ok(roster)
}
