//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::Tracker;

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions and view parameters, shared between request handlers.
    pub tracker: Arc<Mutex<Tracker>>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that serves `tracker`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(tracker: Tracker, local_timezone: &str) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            local_timezone: local_timezone.to_owned(),
        }
    }
}
