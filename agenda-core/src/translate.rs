//! Normalization of server failures into a single user-facing string.
//!
//! The server reports failures in several shapes: schema-validation
//! `message` strings, bare `error` strings, or nothing but a status code.
//! The rules below form an ordered table evaluated top to bottom; the
//! first matching rule renders the text. Rule order and the mixed
//! case-sensitivity of the substring checks track the server's observed
//! behavior, so change them only together with the server.

use crate::api::ApiFailure;
use crate::error::AgendaError;

pub const INVALID_EMAIL: &str = "Invalid email format";
pub const INVALID_NAME: &str = "Invalid name format";
pub const PASSWORD_TOO_SHORT: &str = "Password is too short";
pub const CHECK_INPUT: &str = "Please check your input";
pub const FALLBACK: &str = "Something went wrong, please try again";

struct Rule {
    applies: fn(&ApiFailure) -> bool,
    render: fn(&ApiFailure) -> String,
}

/// First match wins. No rule matching falls through to [`FALLBACK`].
const RULES: &[Rule] = &[
    // Schema-pattern failures name the offending field inside `message`.
    // The outer check is case-sensitive; the field sniffing is not.
    Rule {
        applies: |f| message_contains(f, "match pattern"),
        render: render_pattern_failure,
    },
    Rule {
        applies: |f| message_contains(f, "password"),
        render: |_| PASSWORD_TOO_SHORT.to_string(),
    },
    Rule {
        applies: |f| f.message.is_some(),
        render: |f| f.message.clone().unwrap_or_default(),
    },
    Rule {
        applies: |f| f.error.is_some(),
        render: |f| f.error.clone().unwrap_or_default(),
    },
    Rule {
        applies: |f| f.status == 400,
        render: |_| CHECK_INPUT.to_string(),
    },
];

/// Render a structured server failure as one human-readable line.
pub fn translate(failure: &ApiFailure) -> String {
    RULES
        .iter()
        .find(|rule| (rule.applies)(failure))
        .map(|rule| (rule.render)(failure))
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// Notification text for any client error.
///
/// Transport failures carry no payload and fall to the generic fallback.
pub fn translate_error(err: &AgendaError) -> String {
    match err {
        AgendaError::Server(failure) => translate(failure),
        AgendaError::Validation(reason) => reason.clone(),
        _ => FALLBACK.to_string(),
    }
}

fn message_contains(failure: &ApiFailure, needle: &str) -> bool {
    failure
        .message
        .as_deref()
        .is_some_and(|message| message.contains(needle))
}

fn render_pattern_failure(failure: &ApiFailure) -> String {
    let message = failure.message.clone().unwrap_or_default();
    let lower = message.to_lowercase();

    if lower.contains("email") {
        INVALID_EMAIL.to_string()
    } else if lower.contains("name") {
        INVALID_NAME.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_message(message: &str) -> ApiFailure {
        ApiFailure {
            status: 400,
            message: Some(message.to_string()),
            error: None,
        }
    }

    #[test]
    fn test_email_pattern_message() {
        let failure = with_message("email must match pattern \"^\\\\S+@\\\\S+$\"");
        assert_eq!(translate(&failure), INVALID_EMAIL);
    }

    #[test]
    fn test_name_pattern_message_sniffs_case_insensitively() {
        let failure = with_message("Name must match pattern \"^[A-Z].*\"");
        assert_eq!(translate(&failure), INVALID_NAME);
    }

    #[test]
    fn test_password_pattern_message_falls_back_to_verbatim() {
        // "match pattern" wins the rule race before the password rule is
        // reached, and the pattern rule only knows email and name, so the
        // raw message comes through untouched.
        let failure = with_message("password must match pattern \".{8,}\"");
        assert_eq!(
            translate(&failure),
            "password must match pattern \".{8,}\""
        );
    }

    #[test]
    fn test_outer_pattern_check_is_case_sensitive() {
        // "Match Pattern" does not trip rule 1, and without "password"
        // either, the message passes through verbatim.
        let failure = with_message("email must Match Pattern \"x\"");
        assert_eq!(translate(&failure), "email must Match Pattern \"x\"");
    }

    #[test]
    fn test_password_message_without_pattern() {
        let failure = with_message("password is shorter than 8 characters");
        assert_eq!(translate(&failure), PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_plain_message_passes_through() {
        let failure = with_message("Email already exists");
        assert_eq!(translate(&failure), "Email already exists");
    }

    #[test]
    fn test_error_field_passes_through_verbatim() {
        let failure = ApiFailure {
            status: 401,
            message: None,
            error: Some("Credenciales inválidas".to_string()),
        };
        assert_eq!(translate(&failure), "Credenciales inválidas");
    }

    #[test]
    fn test_message_takes_precedence_over_error() {
        let failure = ApiFailure {
            status: 400,
            message: Some("Email already exists".to_string()),
            error: Some("Bad Request".to_string()),
        };
        assert_eq!(translate(&failure), "Email already exists");
    }

    #[test]
    fn test_bare_400_maps_to_check_input() {
        let failure = ApiFailure {
            status: 400,
            message: None,
            error: None,
        };
        assert_eq!(translate(&failure), CHECK_INPUT);
    }

    #[test]
    fn test_bare_500_maps_to_fallback() {
        let failure = ApiFailure {
            status: 500,
            message: None,
            error: None,
        };
        assert_eq!(translate(&failure), FALLBACK);
    }

    #[test]
    fn test_transport_errors_fall_to_fallback() {
        let err = AgendaError::Transport("connection refused".to_string());
        assert_eq!(translate_error(&err), FALLBACK);
    }

    #[test]
    fn test_validation_errors_pass_their_reason() {
        let err = AgendaError::Validation("All fields are required".to_string());
        assert_eq!(translate_error(&err), "All fields are required");
    }
}
