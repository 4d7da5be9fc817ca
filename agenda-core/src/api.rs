//! Typed HTTP gateway to the agenda server.
//!
//! Every operation is a single request/response pair; nothing here
//! retries, caches, or mutates local state. Callers (the orchestrator,
//! the CLI) decide whether to surface or retry a failure.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{AgendaError, AgendaResult};
use crate::event::{Event, User, ValidDraft};

/// A non-2xx response, with whatever structure the server provided.
///
/// Validation-style failures carry `message`, auth-style failures carry
/// `error`; plenty of responses carry neither. Translation into a single
/// user-facing string happens in [`crate::translate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiFailure {
    pub status: u16,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "server returned status {}", self.status)
    }
}

/// Body shape the server uses for failures.
#[derive(Debug, Default, Deserialize)]
struct FailureBody {
    message: Option<String>,
    error: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Successful login payload.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Create/update body. The owner id rides along as `userId` on create
/// only; updates send just the form fields so the server keeps `id` and
/// owner untouched.
#[derive(Debug, Serialize)]
struct EventPayload<'a> {
    title: &'a str,
    description: &'a str,
    location: &'a str,
    date: DateTime<Utc>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    user_id: Option<i64>,
}

impl<'a> EventPayload<'a> {
    fn from_draft(draft: &'a ValidDraft, user_id: Option<i64>) -> Self {
        EventPayload {
            title: &draft.title,
            description: &draft.description,
            location: &draft.location,
            date: draft.date,
            user_id,
        }
    }
}

/// The event CRUD surface of the server.
///
/// Implemented by [`ApiClient`]; the orchestrator is generic over this
/// trait so tests can substitute an in-memory fake.
#[async_trait]
pub trait EventApi {
    /// All events on the server, unscoped. Callers filter by owner.
    async fn list_events(&self) -> AgendaResult<Vec<Event>>;
    async fn create_event(&self, draft: &ValidDraft, owner_user_id: i64) -> AgendaResult<Event>;
    async fn update_event(&self, id: i64, draft: &ValidDraft) -> AgendaResult<Event>;
    async fn delete_event(&self, id: i64) -> AgendaResult<()>;
}

/// HTTP client for the agenda server.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// Attach the session token; event operations send it as a bearer.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// POST /login
    pub async fn login(&self, email: &str, password: &str) -> AgendaResult<LoginResponse> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(transport)?;

        decode(response).await
    }

    /// POST /register
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AgendaResult<()> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(&RegisterRequest {
                name,
                email,
                password,
            })
            .send()
            .await
            .map_err(transport)?;

        check(response).await
    }
}

#[async_trait]
impl EventApi for ApiClient {
    async fn list_events(&self) -> AgendaResult<Vec<Event>> {
        let response = self
            .authed(self.http.get(self.url("/events")))
            .send()
            .await
            .map_err(transport)?;

        decode(response).await
    }

    async fn create_event(&self, draft: &ValidDraft, owner_user_id: i64) -> AgendaResult<Event> {
        let response = self
            .authed(self.http.post(self.url("/events")))
            .json(&EventPayload::from_draft(draft, Some(owner_user_id)))
            .send()
            .await
            .map_err(transport)?;

        decode(response).await
    }

    async fn update_event(&self, id: i64, draft: &ValidDraft) -> AgendaResult<Event> {
        let response = self
            .authed(self.http.put(self.url(&format!("/events/{id}"))))
            .json(&EventPayload::from_draft(draft, None))
            .send()
            .await
            .map_err(transport)?;

        decode(response).await
    }

    async fn delete_event(&self, id: i64) -> AgendaResult<()> {
        let response = self
            .authed(self.http.delete(self.url(&format!("/events/{id}"))))
            .send()
            .await
            .map_err(transport)?;

        check(response).await
    }
}

fn transport(e: reqwest::Error) -> AgendaError {
    AgendaError::Transport(e.to_string())
}

/// Decode a success body, or capture the failure payload.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AgendaResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(failure(status.as_u16(), response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AgendaError::Transport(format!("Failed to decode response: {e}")))
}

/// Like [`decode`] for operations whose success body we discard.
async fn check(response: reqwest::Response) -> AgendaResult<()> {
    let status = response.status();
    if !status.is_success() {
        return Err(failure(status.as_u16(), response).await);
    }
    Ok(())
}

async fn failure(status: u16, response: reqwest::Response) -> AgendaError {
    // A failure body may be empty or non-JSON; keep the status either way.
    let body: FailureBody = response.json().await.unwrap_or_default();
    AgendaError::Server(ApiFailure {
        status,
        message: body.message,
        error: body.error,
    })
}
