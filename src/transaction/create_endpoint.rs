//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{AppState, Error, Tracker, endpoints, transaction::form::TransactionForm};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The tracker that stores the transactions.
    pub tracker: Arc<Mutex<Tracker>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
        }
    }
}

/// A route handler for creating a new transaction, redirects to the tracker page on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let builder = match form.validate() {
        Ok(builder) => builder,
        Err(error) => {
            tracing::warn!("rejected new transaction: {error}");
            return error.into_alert_response();
        }
    };

    let mut tracker = match state.tracker.lock() {
        Ok(tracker) => tracker,
        Err(error) => {
            tracing::error!("could not acquire tracker lock: {error}");
            return Error::TrackerLockError.into_alert_response();
        }
    };

    let transaction = tracker.add(builder);
    tracing::info!("created transaction {}", transaction.id);

    (HxRedirect(endpoints::ROOT.to_owned()), StatusCode::SEE_OTHER).into_response()
}
