//! Support for library configuration options

use std::sync::{Arc, Mutex};
use std::time::Duration;
use once_cell::sync::Lazy;

/// Where the programme document is read from, when no other location is given.
/// This is either a local path or an `http(s)` URL. It can be overridden by the `PROGRAMME_DATA` environment variable.
pub static DATA_LOCATION: Lazy<Arc<Mutex<String>>> = Lazy::new(|| {
    let location = std::env::var("PROGRAMME_DATA").unwrap_or_else(|_| "data.json".to_string());
    Arc::new(Mutex::new(location))
});

/// Month and year that every day code falls into (used when a day code has no entry in the date table).
/// Feel free to override it when initing this library.
pub static CONFERENCE_MONTH: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("August 2025".to_string())));

/// How long a registration confirmation stays visible
pub const SUCCESS_MESSAGE_DURATION: Duration = Duration::from_secs(8);

/// Shown in place of the programme list while nothing is loaded
pub const LOADING_NOTICE: &str = "Loading programmes...";

/// Shown in place of the programme list when the programme document could not be loaded
pub const LOAD_ERROR_NOTICE: &str = "Error loading programme data. Please refresh the page.";

/// Shown to the visitor when a registration is rejected
pub const MISSING_FIELDS_NOTICE: &str = "Please fill in all required fields";

/// Returns the current value of [`DATA_LOCATION`]
pub fn data_location() -> String {
    match DATA_LOCATION.lock() {
        Ok(location) => location.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Returns the current value of [`CONFERENCE_MONTH`]
pub fn conference_month() -> String {
    match CONFERENCE_MONTH.lock() {
        Ok(month) => month.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
