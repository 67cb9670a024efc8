//! The state container that owns the transactions and the view parameters.

use time::{Date, macros::date};

use crate::{
    transaction::{Transaction, TransactionBuilder, TransactionStore, TransactionType},
    view::{DerivedView, ViewMode, ViewParameters, derive_view, view_title},
};

/// The single owner of the transaction store and the current view parameters.
///
/// All mutations go through a `&mut Tracker`, so there is exactly one writer at
/// a time. The derived view is cached and recomputed whenever the store or the
/// view parameters have changed since it was last computed.
#[derive(Debug, Clone)]
pub struct Tracker {
    store: TransactionStore,
    view_parameters: ViewParameters,
    cached_view: Option<CachedView>,
}

#[derive(Debug, Clone)]
struct CachedView {
    store_revision: u64,
    view_parameters: ViewParameters,
    view: DerivedView,
}

impl CachedView {
    fn is_current(&self, store_revision: u64, view_parameters: &ViewParameters) -> bool {
        self.store_revision == store_revision && &self.view_parameters == view_parameters
    }
}

impl Tracker {
    /// Create a tracker with no transactions showing the month of
    /// `reference_date`.
    pub fn new(reference_date: Date) -> Self {
        Self {
            store: TransactionStore::new(),
            view_parameters: ViewParameters::new(ViewMode::default(), reference_date),
            cached_view: None,
        }
    }

    /// Create a tracker with a handful of example transactions from mid 2023
    /// to mid 2024.
    pub fn with_demo_transactions(reference_date: Date) -> Self {
        let mut tracker = Self::new(reference_date);

        for builder in demo_transactions() {
            tracker.add(builder);
        }

        tracker
    }

    /// The stored transactions.
    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// The parameters the derived view is computed from.
    pub fn view_parameters(&self) -> &ViewParameters {
        &self.view_parameters
    }

    /// Add a new transaction, see [TransactionStore::add].
    pub fn add(&mut self, builder: TransactionBuilder) -> Transaction {
        self.store.add(builder)
    }

    /// Replace an existing transaction, see [TransactionStore::update].
    pub fn update(&mut self, transaction: Transaction) -> bool {
        self.store.update(transaction)
    }

    /// Set the granularity of the date filter.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.view_parameters.mode = mode;
    }

    /// Set the anchor date of the date filter.
    pub fn set_reference_date(&mut self, reference_date: Date) {
        self.view_parameters.reference_date = reference_date;
    }

    /// Set the text that transaction descriptions must contain.
    pub fn set_search_query(&mut self, search_query: &str) {
        search_query.clone_into(&mut self.view_parameters.search_query);
    }

    /// The visible transactions and their totals for the current state.
    pub fn derived_view(&mut self) -> &DerivedView {
        let store_revision = self.store.revision();

        let cached_view = match self.cached_view.take() {
            Some(cached_view) if cached_view.is_current(store_revision, &self.view_parameters) => {
                cached_view
            }
            _ => {
                tracing::debug!(
                    "recomputing derived view for revision {store_revision} with {:?}",
                    self.view_parameters
                );

                CachedView {
                    store_revision,
                    view_parameters: self.view_parameters.clone(),
                    view: derive_view(self.store.transactions(), &self.view_parameters),
                }
            }
        };

        &self.cached_view.insert(cached_view).view
    }

    /// The heading for the current view mode and reference date.
    pub fn title(&self) -> String {
        view_title(self.view_parameters.mode, self.view_parameters.reference_date)
    }
}

fn demo_transactions() -> [TransactionBuilder; 6] {
    [
        Transaction::build(3000.0, date!(2024 - 07 - 15), "Salary")
            .transaction_type(TransactionType::Income),
        Transaction::build(150.0, date!(2024 - 07 - 15), "Groceries")
            .transaction_type(TransactionType::Expense),
        Transaction::build(500.0, date!(2024 - 07 - 16), "Freelance Work")
            .transaction_type(TransactionType::Income),
        Transaction::build(1200.0, date!(2024 - 07 - 20), "Rent")
            .transaction_type(TransactionType::Expense),
        Transaction::build(60.0, date!(2024 - 06 - 10), "Internet Bill")
            .transaction_type(TransactionType::Expense),
        Transaction::build(1000.0, date!(2023 - 12 - 25), "Christmas Bonus")
            .transaction_type(TransactionType::Income),
    ]
}
