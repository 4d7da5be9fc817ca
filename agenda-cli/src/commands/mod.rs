pub mod delete;
pub mod edit;
pub mod list;
pub mod login;
pub mod logout;
pub mod new;
pub mod register;
pub mod show;
pub mod whoami;

use agenda_core::api::ApiClient;
use agenda_core::orchestrator::{LoadState, Orchestrator};
use agenda_core::{Event, Session, SessionStore};
use anyhow::{Context, Result};

use crate::config::Config;
use crate::prompt::TermPrompt;
use crate::tui;

/// An unauthenticated client (login/register).
pub fn api_client() -> Result<ApiClient> {
    let config = Config::load()?;
    Ok(ApiClient::new(config.server_url))
}

/// Session gate for protected commands.
pub fn require_session() -> Result<(SessionStore, Session)> {
    let store = SessionStore::open_default()?;
    match store.current() {
        Some(session) => Ok((store, session)),
        None => anyhow::bail!(
            "Not logged in.\n\n\
            Log in with:\n  \
            agenda login\n\n\
            Or create an account with:\n  \
            agenda register"
        ),
    }
}

/// The composition root for protected commands: session, token-bearing
/// client, terminal prompts.
pub fn build_orchestrator() -> Result<Orchestrator<ApiClient, TermPrompt>> {
    let (store, session) = require_session()?;
    let config = Config::load()?;
    let api = ApiClient::new(config.server_url).with_token(session.token.clone());

    Ok(Orchestrator::new(api, TermPrompt, store, session))
}

/// Refresh and look up one of the user's events by id.
pub async fn resolve_event(
    orch: &mut Orchestrator<ApiClient, TermPrompt>,
    id: i64,
) -> Result<Event> {
    let spinner = tui::spinner("Loading events...");
    orch.refresh().await;
    spinner.finish_and_clear();

    if orch.state() != LoadState::Loaded {
        anyhow::bail!("Could not load events from the server");
    }

    orch.events()
        .iter()
        .find(|event| event.id == id)
        .cloned()
        .with_context(|| format!("Event #{id} not found. Run `agenda list` to see your events."))
}
