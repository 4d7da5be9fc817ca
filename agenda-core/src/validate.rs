//! Pre-submit validation of event form input.
//!
//! Validation runs entirely client-side and blocks submission: a draft
//! that fails here never produces a network call. The server stays
//! authoritative for whatever it wants to re-check.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::event::{EventDraft, ValidDraft};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const DATE_MUST_BE_FUTURE: &str = "The date must be in the future";

/// Validate a draft against the current instant.
///
/// All four fields must be non-empty after trimming, and the date must
/// parse and lie strictly after `now`. The rejection reason is
/// field-agnostic, mirroring how the form surfaces it.
pub fn validate_draft(draft: &EventDraft, now: DateTime<Utc>) -> Result<ValidDraft, String> {
    let title = draft.title.trim();
    let description = draft.description.trim();
    let location = draft.location.trim();
    let date = draft.date.trim();

    if title.is_empty() || description.is_empty() || location.is_empty() || date.is_empty() {
        return Err(ALL_FIELDS_REQUIRED.to_string());
    }

    let date = parse_date(date)?;
    if date <= now {
        return Err(DATE_MUST_BE_FUTURE.to_string());
    }

    Ok(ValidDraft {
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        date,
    })
}

/// Parse a date/time string into a UTC instant.
///
/// Accepts RFC 3339, or a naive `YYYY-MM-DDTHH:MM[:SS]` (a space works as
/// the separator too), which is taken as UTC.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(format!("Could not parse date/time: \"{input}\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 3, 20, 15, 0, 0).unwrap()
    }

    fn make_draft(date: &str) -> EventDraft {
        EventDraft {
            title: "Standup".to_string(),
            description: "Daily sync".to_string(),
            location: "Room 2".to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_accepts_a_future_draft() {
        let valid = validate_draft(&make_draft("2030-06-01T10:00:00Z"), now()).unwrap();

        assert_eq!(valid.title, "Standup");
        assert_eq!(
            valid.date,
            Utc.with_ymd_and_hms(2030, 6, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_rejects_any_empty_field() {
        let mut draft = make_draft("2030-06-01T10:00:00Z");
        draft.title = "  ".to_string();
        assert_eq!(
            validate_draft(&draft, now()),
            Err(ALL_FIELDS_REQUIRED.to_string())
        );

        let mut draft = make_draft("2030-06-01T10:00:00Z");
        draft.description = String::new();
        assert_eq!(
            validate_draft(&draft, now()),
            Err(ALL_FIELDS_REQUIRED.to_string())
        );

        let mut draft = make_draft("2030-06-01T10:00:00Z");
        draft.location = String::new();
        assert_eq!(
            validate_draft(&draft, now()),
            Err(ALL_FIELDS_REQUIRED.to_string())
        );

        let draft = make_draft("");
        assert_eq!(
            validate_draft(&draft, now()),
            Err(ALL_FIELDS_REQUIRED.to_string())
        );
    }

    #[test]
    fn test_rejects_past_and_present_dates() {
        let past = now() - Duration::hours(1);
        assert_eq!(
            validate_draft(&make_draft(&past.to_rfc3339()), now()),
            Err(DATE_MUST_BE_FUTURE.to_string())
        );

        // The current instant itself is not "strictly after".
        assert_eq!(
            validate_draft(&make_draft(&now().to_rfc3339()), now()),
            Err(DATE_MUST_BE_FUTURE.to_string())
        );
    }

    #[test]
    fn test_accepts_one_second_in_the_future() {
        let barely_future = now() + Duration::seconds(1);
        let valid = validate_draft(&make_draft(&barely_future.to_rfc3339()), now()).unwrap();

        assert_eq!(valid.date, barely_future);
    }

    #[test]
    fn test_naive_input_is_taken_as_utc() {
        let valid = validate_draft(&make_draft("2030-06-01T10:00"), now()).unwrap();
        assert_eq!(
            valid.date,
            Utc.with_ymd_and_hms(2030, 6, 1, 10, 0, 0).unwrap()
        );

        let valid = validate_draft(&make_draft("2030-06-01 10:00:30"), now()).unwrap();
        assert_eq!(
            valid.date,
            Utc.with_ymd_and_hms(2030, 6, 1, 10, 0, 30).unwrap()
        );
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let err = validate_draft(&make_draft("next tuesday-ish"), now()).unwrap_err();
        assert!(err.contains("next tuesday-ish"));
    }
}
