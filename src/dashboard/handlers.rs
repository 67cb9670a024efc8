//! The tracker page handler and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the tracker page
//! - The HTML view function that lays out the form, controls, summary, chart and list
//! - State and query types used by the handler

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, Tracker,
    dashboard::{
        cards::summary_cards_view,
        charts::{DashboardChart, chart_view, charts_script},
        controls::view_controls_view,
        list::transaction_list_view,
    },
    endpoints,
    html::{CARD_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base},
    timezone::local_today,
    transaction::{Transaction, TransactionFormDefaults, TransactionId, transaction_form_view},
    view::{DerivedView, ViewParameters},
};

/// The state needed for displaying the tracker page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The tracker that holds the transactions and view parameters.
    pub tracker: Arc<Mutex<Tracker>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query parameters for the tracker page.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// The transaction to load into the form for editing.
    pub edit: Option<TransactionId>,
}

/// Everything the tracker page shows, taken from the tracker in one go.
struct DashboardData<'a> {
    view_parameters: ViewParameters,
    title: String,
    editing: Option<Transaction>,
    derived_view: &'a DerivedView,
}

/// Display the tracker page for the current view parameters.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    let mut tracker = state
        .tracker
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire tracker lock: {error}"))
        .map_err(|_| Error::TrackerLockError)?;

    let editing = query.edit.and_then(|transaction_id| {
        let transaction = tracker.store().get(transaction_id).cloned();

        if transaction.is_none() {
            tracing::warn!("cannot edit unknown transaction {transaction_id}");
        }

        transaction
    });

    let view_parameters = tracker.view_parameters().clone();
    let title = tracker.title();
    let data = DashboardData {
        view_parameters,
        title,
        editing,
        derived_view: tracker.derived_view(),
    };

    Ok(dashboard_view(&data, today).into_response())
}

fn dashboard_view(data: &DashboardData<'_>, today: Date) -> Markup {
    let chart = DashboardChart::income_expense(&data.derived_view.totals);

    let (form_title, form) = match &data.editing {
        Some(transaction) => (
            "Edit Transaction",
            transaction_form_view(
                &TransactionFormDefaults::from(transaction),
                Some(transaction.id),
            ),
        ),
        None => (
            "Add New Transaction",
            transaction_form_view(&TransactionFormDefaults::blank(today), None),
        ),
    };

    let content = html!(
        div id="tracker-content" class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold self-start" { "Pocket Ledger" }

            section id="transaction-form-section" class=(CARD_STYLE)
            {
                h2 class="text-xl font-bold mb-4 text-center" { (form_title) }

                (form)
            }

            (view_controls_view(&data.view_parameters, &data.title))

            (summary_cards_view(&data.derived_view.totals))

            div class="w-full grid grid-cols-1 md:grid-cols-2 gap-4"
            {
                section id="chart" class=(CARD_STYLE)
                {
                    (chart_view(&chart))
                }

                (transaction_list_view(&data.derived_view.visible_transactions))
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink(format!("{}/echarts.6.0.0.min.js", endpoints::STATIC)),
        charts_script(&[chart]),
    ];

    base(&data.title, &scripts, &content)
}
