use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::config::HoursConfig;

/// The fixed Monday-first week used for all grouping and sorting.
pub const CANONICAL_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full day name, e.g. "Monday".
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Three-letter day abbreviation, e.g. "Mon".
pub fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Opening hours for a single weekday.
///
/// When `is_open` is false the time strings carry no meaning and must not
/// be compared. When it is true, both are expected to be wall-clock
/// `HH:MM` values with start strictly before end; enforcing that is the
/// validation layer's job, not this type's.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayTiming {
    #[serde(default, alias = "isOpen")]
    pub is_open: bool,
    #[serde(default, alias = "startTime")]
    pub start_time: String,
    #[serde(default, alias = "endTime")]
    pub end_time: String,
}

impl DayTiming {
    /// An open day with the given hours.
    pub fn open(start: &str, end: &str) -> Self {
        Self {
            is_open: true,
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    /// A closed day.
    pub fn closed() -> Self {
        Self::default()
    }
}

/// Per-weekday opening hours for a vendor.
///
/// One entry per weekday, always all seven; the struct shape guarantees
/// the seven-day-complete input the consolidator requires. Accepts both
/// full day names and three-letter codes as JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyTimings {
    #[serde(alias = "Monday", alias = "Mon")]
    pub monday: DayTiming,
    #[serde(alias = "Tuesday", alias = "Tue")]
    pub tuesday: DayTiming,
    #[serde(alias = "Wednesday", alias = "Wed")]
    pub wednesday: DayTiming,
    #[serde(alias = "Thursday", alias = "Thu")]
    pub thursday: DayTiming,
    #[serde(alias = "Friday", alias = "Fri")]
    pub friday: DayTiming,
    #[serde(alias = "Saturday", alias = "Sat")]
    pub saturday: DayTiming,
    #[serde(alias = "Sunday", alias = "Sun")]
    pub sunday: DayTiming,
}

impl WeeklyTimings {
    /// The timing entry for a given weekday.
    pub fn day(&self, day: Weekday) -> &DayTiming {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Mutable access to the timing entry for a given weekday.
    pub fn day_mut(&mut self, day: Weekday) -> &mut DayTiming {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Iterate all seven entries in canonical Monday-first order,
    /// regardless of how the value was built or deserialized.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayTiming)> {
        CANONICAL_WEEK.into_iter().map(move |d| (d, self.day(d)))
    }

    /// True when no day is marked open.
    pub fn all_closed(&self) -> bool {
        self.iter().all(|(_, t)| !t.is_open)
    }

    /// Fill in the configured default hours on open days whose start or
    /// end time is blank. Explicit and opt-in: nothing else in the crate
    /// applies defaults, so data-entry gaps stay visible unless the
    /// caller asks for this.
    pub fn fill_blank_open_days(&mut self, defaults: &HoursConfig) {
        for day in CANONICAL_WEEK {
            let timing = self.day_mut(day);
            if !timing.is_open {
                continue;
            }
            if timing.start_time.is_empty() {
                timing.start_time = defaults.default_open.clone();
            }
            if timing.end_time.is_empty() {
                timing.end_time = defaults.default_close.clone();
            }
        }
    }
}
