//! Defines the endpoint for updating an existing transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, Tracker, endpoints,
    transaction::{TransactionId, form::TransactionForm},
};

/// The state needed to edit a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The tracker that stores the transactions.
    pub tracker: Arc<Mutex<Tracker>>,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
        }
    }
}

/// A route handler for replacing the fields of a transaction, redirects to
/// the tracker page on success.
///
/// Updating a transaction that does not exist leaves the store unchanged.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let builder = match form.validate() {
        Ok(builder) => builder,
        Err(error) => {
            tracing::warn!("rejected update to transaction {transaction_id}: {error}");
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

    if tracker.update(builder.finalize(transaction_id)) {
        tracing::info!("updated transaction {transaction_id}");
    } else {
        tracing::warn!("ignored update to unknown transaction {transaction_id}");
    }

    (HxRedirect(endpoints::ROOT.to_owned()), StatusCode::SEE_OTHER).into_response()
}
