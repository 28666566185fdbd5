//! JSON import/export of a learner's scheduler state.
//! Files use the same record layout as the persisted store, pretty-printed.

use crate::error::Result;
use crate::models::SchedulerState;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Exports a learner's state to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_state_to_path(state: &SchedulerState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = state.to_json_pretty()?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;

    info!(path = %path.display(), items = state.items.len(), "state exported");
    Ok(())
}

/// Imports a learner's state from a JSON file.
/// Returns an error if the file doesn't exist, contains invalid JSON or
/// timestamps, or lists the same item id twice.
pub fn import_state(path: impl AsRef<Path>) -> Result<SchedulerState> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let state = SchedulerState::from_json(&contents)?;

    info!(path = %path.display(), items = state.items.len(), "state imported");
    Ok(state)
}
