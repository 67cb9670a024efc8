//! Defines the endpoint for changing the view mode, reference date and search text.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{AppState, Error, Tracker, endpoints, view::ViewMode};

/// The state needed to change the view parameters.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// The tracker that holds the view parameters.
    pub tracker: Arc<Mutex<Tracker>>,
}

impl FromRef<AppState> for ViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
        }
    }
}

/// The form data submitted by the view controls.
///
/// The controls always submit the date and search inputs, while the mode is
/// only sent by the mode buttons.
#[derive(Debug, Default, Deserialize)]
pub struct ViewForm {
    /// The new view mode, unchanged if omitted.
    pub mode: Option<ViewMode>,
    /// The new reference date, unchanged if omitted.
    pub date: Option<Date>,
    /// The new search text. An empty search box is sent as `Some("")`, and
    /// either that or an omitted field clears the search.
    pub search: Option<String>,
}

/// A route handler for updating the view parameters, redirects to the tracker page.
pub async fn update_view_endpoint(
    State(state): State<ViewState>,
    Form(form): Form<ViewForm>,
) -> Response {
    let mut tracker = match state.tracker.lock() {
        Ok(tracker) => tracker,
        Err(error) => {
            tracing::error!("could not acquire tracker lock: {error}");
            return Error::TrackerLockError.into_alert_response();
        }
    };

    if let Some(mode) = form.mode {
        tracker.set_mode(mode);
    }

    if let Some(date) = form.date {
        tracker.set_reference_date(date);
    }

    tracker.set_search_query(form.search.as_deref().unwrap_or_default());
    tracing::debug!("view parameters set to {:?}", tracker.view_parameters());

    (HxRedirect(endpoints::ROOT.to_owned()), StatusCode::SEE_OTHER).into_response()
}
