//! Client core for the agenda event manager.
//!
//! This crate holds everything with decision logic:
//! - `session` for the persisted login session and the guard around it
//! - `api` for the typed HTTP gateway to the agenda server
//! - `validate` and `translate` for pre-submit validation and
//!   server-error normalization
//! - `sort` for ordering the event list
//! - `orchestrator` for the session-gated CRUD flows tying it all together
//!
//! Terminal interaction is injected through [`orchestrator::Interact`], so
//! the crate itself never touches stdin/stdout.

pub mod api;
pub mod error;
pub mod event;
pub mod orchestrator;
pub mod session;
pub mod sort;
pub mod translate;
pub mod validate;

pub use error::{AgendaError, AgendaResult};
pub use event::{Event, EventDraft, User, ValidDraft};
pub use session::{Session, SessionStore};
