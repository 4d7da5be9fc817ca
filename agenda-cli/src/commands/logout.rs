use agenda_core::SessionStore;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::build_orchestrator;

pub fn run() -> Result<()> {
    let store = SessionStore::open_default()?;
    if store.current().is_none() {
        println!("{}", "No active session".dimmed());
        return Ok(());
    }

    build_orchestrator()?.logout()?;
    println!("Logged out.");

    Ok(())
}
