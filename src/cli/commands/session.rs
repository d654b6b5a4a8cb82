use anyhow::Result;

use crate::session::{SessionStore, SqliteStore, get_or_create_session_id};
use crate::status;
use crate::ui::Style;

/// Shows the stored session id (creating it if needed), or forgets it.
///
/// Unlike chat mode this needs the on-disk store; there is nothing useful
/// to show or reset in an in-memory one.
pub fn run_session(reset: bool) -> Result<()> {
    let mut store = SqliteStore::open_default()?;

    if reset {
        store.clear()?;
        status!(
            "{} Session id cleared; a new one is created on next use",
            Style::success("✓")
        );
        return Ok(());
    }

    let id = get_or_create_session_id(&mut store);
    println!("{id}");
    status!("{} {}", Style::label("store"), Style::secondary(store.describe()));
    Ok(())
}
