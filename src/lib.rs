//! Vendor Hours Library
//!
//! Admin-side tooling for a marketplace platform's vendor opening
//! hours: the weekly timings data model, the schedule consolidation
//! used by detail views, shared form validation, the stored application
//! context, and a thin client for the platform backend.

pub mod api;
pub mod config;
pub mod consolidate;
pub mod context;
pub mod export;
pub mod timings;
pub mod validation;

// Re-export commonly used types
pub use api::{BackendClient, VendorRecord};
pub use config::AppConfig;
pub use consolidate::{ScheduleGroup, consolidate};
pub use context::{AppContext, CurrencySettings};
pub use export::write_schedule_csv;
pub use timings::{CANONICAL_WEEK, DayTiming, WeeklyTimings, weekday_label, weekday_short};
pub use validation::{
    ValidationError, validate_email, validate_name, validate_phone, validate_time,
    validate_time_range, validate_timings,
};
