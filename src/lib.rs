//! Pocket Ledger is a single-user web app for tracking income and expenses.
//!
//! The core of the library is pure and free of I/O:
//! - [TransactionStore] holds the recorded transactions,
//! - [ViewParameters] selects the period and search text to display,
//! - [derive_view] filters, sorts and totals the transactions,
//! - [Tracker] owns the store and view parameters and caches the derived view.
//!
//! On top of that, the library provides a router that serves the tracker as
//! HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod timezone;
mod tracker;
mod transaction;
mod view;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::{get_local_offset, local_today};
pub use tracker::Tracker;
pub use transaction::{
    Transaction, TransactionBuilder, TransactionId, TransactionStore, TransactionType,
};
pub use view::{
    DerivedView, Totals, ViewMode, ViewParameters, compute_totals, derive_view,
    filter_transactions, matches_period, matches_search, sort_by_date_desc, view_title,
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field of the transaction form was left empty.
    ///
    /// The string is the name of the first missing field.
    #[error("the field \"{0}\" is required")]
    MissingField(&'static str),

    /// The transaction form contained a negative or non-finite amount.
    ///
    /// Amounts are magnitudes, whether money was earned or spent is given by
    /// the transaction type.
    #[error("{0} is not a valid amount")]
    InvalidAmount(f64),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the lock on the tracker, which happens if a thread
    /// panicked while holding it.
    #[error("could not acquire the tracker lock")]
    TrackerLockError,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => not_found::get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::TrackerLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingField(_) => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: "Please fill all fields".to_owned(),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "{amount} is not a valid amount. Enter zero or a positive number."
                    ),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
