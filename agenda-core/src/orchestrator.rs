//! Session-gated CRUD flows for the event view.
//!
//! Each flow is shaped like a user gesture: gather input through the
//! [`Interact`] capability, call the API, then refetch. Failures never
//! propagate past a notification; the orchestrator always lands back in
//! a stable state, and a failed refresh keeps the last good event list
//! instead of clearing it.

use chrono::Utc;

use crate::api::EventApi;
use crate::error::AgendaResult;
use crate::event::{Event, EventDraft};
use crate::session::{Session, SessionStore};
use crate::sort::{SortSpec, sort_events};
use crate::translate::translate_error;
use crate::validate::validate_draft;

/// Notification severity, rendered by the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
}

/// Blocking interaction capability: prompts suspend the flow until the
/// user acts.
///
/// The CLI backs this with dialoguer; tests use a scripted fake. Errors
/// from these methods mean the terminal itself broke, not that the user
/// declined — declining is `Ok(None)` / `Ok(false)`.
pub trait Interact {
    /// Collect event form input. `None` means the user cancelled.
    /// Re-prompting on invalid input is the implementation's business;
    /// the orchestrator validates whatever comes back regardless.
    fn prompt_event_form(
        &self,
        title: &str,
        initial: Option<&EventDraft>,
    ) -> AgendaResult<Option<EventDraft>>;

    /// Yes/no confirmation.
    fn confirm(&self, title: &str, text: &str) -> AgendaResult<bool>;

    /// Fire-and-forget notification.
    fn notify(&self, kind: Notice, title: &str, text: &str);
}

/// Load state of the event view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadError,
}

/// Coordinates session, API, and sort state for the event view.
pub struct Orchestrator<A, I> {
    api: A,
    interact: I,
    store: SessionStore,
    session: Session,
    spec: SortSpec,
    state: LoadState,
    events: Vec<Event>,
    in_flight: bool,
}

impl<A: EventApi, I: Interact> Orchestrator<A, I> {
    pub fn new(api: A, interact: I, store: SessionStore, session: Session) -> Self {
        Orchestrator {
            api,
            interact,
            store,
            session,
            spec: SortSpec::default(),
            state: LoadState::Idle,
            events: Vec::new(),
            in_flight: false,
        }
    }

    pub fn with_sort(mut self, spec: SortSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The current user's events, ordered by the active sort spec.
    /// Empty until the first successful [`refresh`](Self::refresh).
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch, scope to the current user, and sort.
    ///
    /// On failure the previous list is kept and the failure is surfaced
    /// as a notification; the state moves to [`LoadState::LoadError`] so
    /// callers can tell stale data from fresh.
    pub async fn refresh(&mut self) {
        self.state = LoadState::Loading;

        match self.api.list_events().await {
            Ok(all) => {
                let mine: Vec<Event> = all
                    .into_iter()
                    .filter(|event| event.user_id == self.session.user_id)
                    .collect();
                self.events = sort_events(&mine, self.spec);
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                self.state = LoadState::LoadError;
                self.interact
                    .notify(Notice::Error, "Could not load events", &translate_error(&err));
            }
        }
    }

    /// Prompt for a new event and create it.
    pub async fn create_flow(&mut self) -> AgendaResult<()> {
        if !self.begin_flow() {
            return Ok(());
        }
        let result = self.run_create().await;
        self.in_flight = false;
        result
    }

    async fn run_create(&mut self) -> AgendaResult<()> {
        let Some(draft) = self.interact.prompt_event_form("Create event", None)? else {
            return Ok(());
        };

        let valid = match validate_draft(&draft, Utc::now()) {
            Ok(valid) => valid,
            Err(reason) => {
                self.interact.notify(Notice::Error, "Invalid event", &reason);
                return Ok(());
            }
        };

        match self.api.create_event(&valid, self.session.user_id).await {
            Ok(created) => {
                self.interact
                    .notify(Notice::Success, "Event created", &created.title);
                self.refresh().await;
            }
            Err(err) => {
                self.interact.notify(
                    Notice::Error,
                    "Could not create event",
                    &translate_error(&err),
                );
            }
        }
        Ok(())
    }

    /// Prompt with the event's current values and update it.
    pub async fn edit_flow(&mut self, event: &Event) -> AgendaResult<()> {
        if !self.begin_flow() {
            return Ok(());
        }
        let result = self.run_edit(event).await;
        self.in_flight = false;
        result
    }

    async fn run_edit(&mut self, event: &Event) -> AgendaResult<()> {
        let initial = EventDraft::from_event(event);
        let Some(draft) = self
            .interact
            .prompt_event_form("Edit event", Some(&initial))?
        else {
            return Ok(());
        };

        let valid = match validate_draft(&draft, Utc::now()) {
            Ok(valid) => valid,
            Err(reason) => {
                self.interact.notify(Notice::Error, "Invalid event", &reason);
                return Ok(());
            }
        };

        match self.api.update_event(event.id, &valid).await {
            Ok(updated) => {
                self.interact
                    .notify(Notice::Success, "Event updated", &updated.title);
                self.refresh().await;
            }
            Err(err) => {
                self.interact.notify(
                    Notice::Error,
                    "Could not update event",
                    &translate_error(&err),
                );
            }
        }
        Ok(())
    }

    /// Confirm and delete. Declining issues no API call.
    pub async fn delete_flow(&mut self, event: &Event) -> AgendaResult<()> {
        if !self.begin_flow() {
            return Ok(());
        }
        let result = self.run_delete(event).await;
        self.in_flight = false;
        result
    }

    async fn run_delete(&mut self, event: &Event) -> AgendaResult<()> {
        let confirmed = self.interact.confirm(
            "Delete event?",
            &format!("\"{}\" will be permanently removed", event.title),
        )?;
        if !confirmed {
            return Ok(());
        }

        match self.api.delete_event(event.id).await {
            Ok(()) => {
                self.interact
                    .notify(Notice::Success, "Event deleted", &event.title);
                self.refresh().await;
            }
            Err(err) => {
                self.interact.notify(
                    Notice::Error,
                    "Could not delete event",
                    &translate_error(&err),
                );
            }
        }
        Ok(())
    }

    /// Clear the stored session; the caller drops back to the
    /// unauthenticated entry point.
    pub fn logout(&mut self) -> AgendaResult<()> {
        self.store.clear()
    }

    /// Re-entrancy latch: a flow invoked while another is running is a
    /// no-op. Single user gesture, single in-flight call.
    fn begin_flow(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }
}
