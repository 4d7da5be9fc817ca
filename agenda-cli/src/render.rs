//! Terminal rendering of events.

use agenda_core::Event;
use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;

/// Print the event list grouped by day.
pub fn render_events(events: &[Event]) {
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return;
    }

    let mut current_date: Option<String> = None;

    for event in events {
        let date_label = format_date_label(event.date);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        let id_tag = format!("[#{}]", event.id);
        println!(
            "  {} {} {} {}",
            format_time(event.date),
            event.title,
            format!("📍 {}", event.location).dimmed(),
            id_tag.dimmed()
        );
    }
}

/// Print one event in full (the detail view).
pub fn render_event_details(event: &Event) {
    let local = event.date.with_timezone(&Local);

    println!("{}", event.title.bold());
    println!("  {} {}", "When:".dimmed(), local.format("%A, %B %-d %Y at %H:%M"));
    println!("  {} {}", "Where:".dimmed(), event.location);
    println!("  {} {}", "What:".dimmed(), event.description);
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(date: DateTime<Utc>) -> String {
    let today = Local::now().date_naive();
    let date = date.with_timezone(&Local).date_naive();

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Format the time portion of an event (e.g. "15:00")
fn format_time(date: DateTime<Utc>) -> String {
    format!("{:>5}", date.with_timezone(&Local).format("%H:%M"))
}
