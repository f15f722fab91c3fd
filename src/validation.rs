//! Shared form-field validation.
//!
//! One home for the checks every admin form needs (vendor names,
//! contact details, opening-hours input), so individual callers never
//! re-implement them. All validators are pure; each returns the first
//! problem it finds, and [`validate_timings`] collects every problem
//! across the week instead of stopping early.

use std::sync::OnceLock;

use chrono::Weekday;
use regex::Regex;
use thiserror::Error;

use crate::timings::{WeeklyTimings, weekday_label};

/// Longest accepted vendor/stall name.
pub const MAX_NAME_LEN: usize = 100;

/// Typed validation failures, phrased for direct display in a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("name must be at most {MAX_NAME_LEN} characters")]
    NameTooLong,
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),
    #[error("malformed time (expected HH:MM): {0:?}")]
    MalformedTime(String),
    #[error("end time must be after start time")]
    EndNotAfterStart,
    #[error("{day} is marked open but has no {field} time")]
    MissingTime { day: &'static str, field: &'static str },
    #[error("{day}: {source}")]
    Day {
        day: &'static str,
        source: Box<ValidationError>,
    },
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email regex is valid")
    })
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Optional leading +, digits and common separators only; the
        // digit count is checked separately.
        Regex::new(r"^\+?[0-9 ().-]+$").expect("phone regex is valid")
    })
}

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("time regex is valid")
    })
}

/// Validate a vendor/stall/event name: present, trimmed-non-empty, and
/// within the length cap.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required("name"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required("email"));
    }
    if !email_regex().is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Validate a contact phone number.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(ValidationError::Required("phone"));
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !phone_regex().is_match(phone) || !(7..=15).contains(&digits) {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }
    Ok(())
}

/// Validate a wall-clock time string: strict 24-hour `HH:MM`.
pub fn validate_time(time: &str) -> Result<(), ValidationError> {
    if time_regex().is_match(time) {
        Ok(())
    } else {
        Err(ValidationError::MalformedTime(time.to_string()))
    }
}

/// Validate an open/close pair: both well-formed and start strictly
/// before end. Overnight ranges (start >= end) are a user input error,
/// not a wrap-to-next-day schedule; nothing downstream supports them.
pub fn validate_time_range(start: &str, end: &str) -> Result<(), ValidationError> {
    validate_time(start)?;
    validate_time(end)?;
    // Zero-padded HH:MM compares correctly as a plain string.
    if start >= end {
        return Err(ValidationError::EndNotAfterStart);
    }
    Ok(())
}

/// Validate a full weekly timings record, collecting every problem.
///
/// Closed days are skipped entirely (their time strings carry no
/// meaning). For each open day: blank start/end times are reported as
/// [`ValidationError::MissingTime`], and non-blank times must form a
/// valid same-day range. An empty vector means the record is fit to
/// persist or consolidate.
pub fn validate_timings(timings: &WeeklyTimings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (day, timing) in timings.iter() {
        if !timing.is_open {
            continue;
        }
        collect_day_errors(day, &timing.start_time, &timing.end_time, &mut errors);
    }

    errors
}

fn collect_day_errors(
    day: Weekday,
    start: &str,
    end: &str,
    errors: &mut Vec<ValidationError>,
) {
    let label = weekday_label(day);
    let mut missing = false;

    if start.is_empty() {
        errors.push(ValidationError::MissingTime {
            day: label,
            field: "start",
        });
        missing = true;
    }
    if end.is_empty() {
        errors.push(ValidationError::MissingTime {
            day: label,
            field: "end",
        });
        missing = true;
    }
    if missing {
        return;
    }

    if let Err(err) = validate_time_range(start, end) {
        errors.push(ValidationError::Day {
            day: label,
            source: Box::new(err),
        });
    }
}
