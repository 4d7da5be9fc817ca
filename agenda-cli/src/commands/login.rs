use agenda_core::translate::translate_error;
use agenda_core::{Session, SessionStore};
use anyhow::{Context, Result};
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::commands::api_client;
use crate::tui;

pub async fn run(email: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("  Email")
            .interact_text()?,
    };
    let password =
        rpassword::prompt_password("  Password: ").context("Failed to read password")?;

    let api = api_client()?;
    let spinner = tui::spinner("Logging in...");
    let result = api.login(&email, &password).await;
    spinner.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(err) => anyhow::bail!("Could not log in: {}", translate_error(&err)),
    };

    let store = SessionStore::open_default()?;
    store.save(&Session {
        token: response.token,
        user_id: response.user.id,
        name: response.user.name.clone(),
    })?;

    println!("{}", format!("Logged in as {}", response.user.name).green());
    println!("\nRun `agenda list` to see your events.");

    Ok(())
}
