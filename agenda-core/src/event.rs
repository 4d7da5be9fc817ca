//! Event and user types shared across the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event as the server stores it.
///
/// Events belong to exactly one user; `user_id` travels as `userId` on the
/// wire. Create and update flows never touch `id` or `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Event instant, UTC. RFC 3339 on the wire.
    pub date: DateTime<Utc>,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Unvalidated form input for a single create/edit interaction.
///
/// Every field is a raw string until [`crate::validate::validate_draft`]
/// turns the draft into a [`ValidDraft`]. Discarded on submit or cancel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
}

impl EventDraft {
    /// Pre-populate a draft from an existing event (edit flow).
    pub fn from_event(event: &Event) -> Self {
        EventDraft {
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            date: event.date.to_rfc3339(),
        }
    }
}

/// A draft that passed pre-submit validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
}

/// An authenticated user, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}
