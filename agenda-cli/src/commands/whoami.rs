use agenda_core::SessionStore;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let store = SessionStore::open_default()?;

    match store.current() {
        Some(session) => {
            println!(
                "Logged in as {} (user id {})",
                session.name.bold(),
                session.user_id
            );
        }
        None => println!("{}", "Not logged in. Run `agenda login` first.".dimmed()),
    }

    Ok(())
}
