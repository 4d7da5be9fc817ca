use agenda_core::translate::translate_error;
use anyhow::{Context, Result};
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::commands::api_client;
use crate::tui;

pub async fn run() -> Result<()> {
    let name: String = Input::new().with_prompt("  Name").interact_text()?;
    let email: String = Input::new().with_prompt("  Email").interact_text()?;
    let password =
        rpassword::prompt_password("  Password: ").context("Failed to read password")?;

    let api = api_client()?;
    let spinner = tui::spinner("Creating account...");
    let result = api.register(&name, &email, &password).await;
    spinner.finish_and_clear();

    if let Err(err) = result {
        anyhow::bail!("Could not register: {}", translate_error(&err));
    }

    println!("{}", "Account created.".green());
    println!("\nLog in with:\n  agenda login");

    Ok(())
}
