//! Weekly schedule consolidation.
//!
//! Collapses a seven-day [`WeeklyTimings`] record into the minimal set of
//! "day range: time range" groups a detail view renders, e.g.
//! "Mon - Fri: 09:00 - 17:00" plus "Sat: 10:00 - 14:00".

use chrono::Weekday;

use crate::timings::{WeeklyTimings, weekday_short};

/// One display group: the day-range labels sharing a time range.
///
/// Derived fresh for every render and never persisted. `days` holds one
/// label per maximal run of consecutive open weekdays ("Mon - Fri", or a
/// bare "Sat" for a single day); `time` is the shared "HH:MM - HH:MM"
/// label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleGroup {
    pub days: Vec<String>,
    pub time: String,
}

impl ScheduleGroup {
    /// Render the group as a single display line, e.g.
    /// "Mon - Fri, Sun: 09:00 - 17:00".
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.days.join(", "), self.time)
    }
}

/// Consolidate a weekly timings record into display groups.
///
/// Closed days contribute nothing. Open days are grouped by their exact
/// `(start, end)` string pair (no normalization; an open day with blank
/// times groups under the literal empty strings, so upstream data-entry
/// gaps stay visible). Groups are emitted in order of each time pair's
/// first open day in canonical Monday-first order, and each group's days
/// are split into maximal consecutive runs.
///
/// Pure and infallible: malformed time strings are opaque keys here, and
/// an all-closed week yields an empty vector. Callers render their own
/// "closed" fallback; rejecting bad input belongs to the validation
/// layer before this is ever called.
pub fn consolidate(timings: &WeeklyTimings) -> Vec<ScheduleGroup> {
    // Key vector rather than a hash map so group order is exactly
    // first-appearance order across the canonical week.
    let mut keys: Vec<(&str, &str)> = Vec::new();
    let mut members: Vec<Vec<Weekday>> = Vec::new();

    for (day, timing) in timings.iter() {
        if !timing.is_open {
            continue;
        }
        let key = (timing.start_time.as_str(), timing.end_time.as_str());
        match keys.iter().position(|k| *k == key) {
            Some(idx) => members[idx].push(day),
            None => {
                keys.push(key);
                members.push(vec![day]);
            }
        }
    }

    keys.iter()
        .zip(&members)
        .map(|(&(start, end), days)| ScheduleGroup {
            days: run_labels(days),
            time: format!("{start} - {end}"),
        })
        .collect()
}

/// Split a canonically-ordered day list into maximal consecutive runs
/// and label each run.
fn run_labels(days: &[Weekday]) -> Vec<String> {
    let mut labels = Vec::new();
    let mut i = 0;

    while i < days.len() {
        let mut j = i;
        while j + 1 < days.len()
            && days[j + 1].num_days_from_monday() == days[j].num_days_from_monday() + 1
        {
            j += 1;
        }
        if i == j {
            labels.push(weekday_short(days[i]).to_string());
        } else {
            labels.push(format!(
                "{} - {}",
                weekday_short(days[i]),
                weekday_short(days[j])
            ));
        }
        i = j + 1;
    }

    labels
}
