//! Terminal implementation of the core interaction capability.
//!
//! Prompts block until the user acts, mirroring the modal the flows
//! expect: the form re-prompts on invalid input and only hands a draft
//! back to the orchestrator once it validates (an empty title cancels).

use agenda_core::orchestrator::{Interact, Notice};
use agenda_core::validate::validate_draft;
use agenda_core::{AgendaError, AgendaResult, EventDraft};
use chrono::Utc;
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

pub struct TermPrompt;

impl Interact for TermPrompt {
    fn prompt_event_form(
        &self,
        form_title: &str,
        initial: Option<&EventDraft>,
    ) -> AgendaResult<Option<EventDraft>> {
        println!("{}", form_title.bold());
        println!("{}", "  (leave the title empty to cancel)".dimmed());

        let mut draft = initial.cloned().unwrap_or_default();
        loop {
            draft.title = prompt_field("Title", &draft.title)?;
            if draft.title.trim().is_empty() {
                return Ok(None);
            }
            draft.description = prompt_field("Description", &draft.description)?;
            draft.location = prompt_field("Location", &draft.location)?;
            draft.date = prompt_field("Date (e.g. 2030-03-20T15:00)", &draft.date)?;

            match validate_draft(&draft, Utc::now()) {
                Ok(_) => return Ok(Some(draft)),
                Err(reason) => eprintln!("  {}", reason.red()),
            }
        }
    }

    fn confirm(&self, title: &str, text: &str) -> AgendaResult<bool> {
        println!("{}", title.bold());
        Confirm::new()
            .with_prompt(format!("  {text}. Continue?"))
            .default(false)
            .interact()
            .map_err(prompt_failed)
    }

    fn notify(&self, kind: Notice, title: &str, text: &str) {
        match kind {
            Notice::Success => println!("{}", format!("{title}: {text}").green()),
            Notice::Error => eprintln!("{} {}", title.red(), text),
        }
    }
}

fn prompt_field(label: &str, initial: &str) -> AgendaResult<String> {
    let mut input = Input::<String>::new()
        .with_prompt(format!("  {label}"))
        .allow_empty(true);
    if !initial.is_empty() {
        input = input.with_initial_text(initial);
    }
    input.interact_text().map_err(prompt_failed)
}

fn prompt_failed(e: dialoguer::Error) -> AgendaError {
    AgendaError::Io(std::io::Error::other(e))
}
