//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

// ============================================================================
// MODELS
// ============================================================================

/// The identifier of a transaction.
///
/// IDs are issued by [TransactionStore](super::TransactionStore) from a
/// strictly increasing counter, so no two transactions in a store ever share
/// an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw value of the ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned, e.g. a salary payment.
    Income,
    /// Money that was spent, e.g. groceries.
    #[default]
    Expense,
}

impl TransactionType {
    /// The value used for this type in HTML forms.
    pub fn as_form_value(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// The human readable name of the type.
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and add the
/// resulting builder to a [TransactionStore](super::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    ///
    /// This is always a magnitude, whether the money was spent or earned is
    /// given by [Transaction::type_].
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the transaction is income or an expense.
    pub type_: TransactionType,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability. The transaction
    /// type defaults to [TransactionType::Expense].
    pub fn build(amount: f64, date: Date, description: &str) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            description: description.to_owned(),
            type_: TransactionType::default(),
        }
    }

    /// The amount with income as positive and expenses as negative.
    pub fn signed_amount(&self) -> f64 {
        match self.type_ {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// A transaction that has not been assigned an ID yet.
///
/// # Examples
///
/// ```
/// use pocket_ledger::{Transaction, TransactionStore, TransactionType};
/// use time::macros::date;
///
/// let mut store = TransactionStore::new();
/// let salary = store.add(
///     Transaction::build(3000.0, date!(2024 - 07 - 15), "Salary")
///         .transaction_type(TransactionType::Income),
/// );
///
/// assert_eq!(salary.type_, TransactionType::Income);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The magnitude of the transaction, never negative.
    pub amount: f64,

    /// The date when the transaction occurred.
    pub date: Date,

    /// A human-readable description of the transaction.
    ///
    /// # Examples
    /// - `"Salary"`
    /// - `"Groceries"`
    /// - `"Internet Bill"`
    pub description: String,

    /// Whether the transaction is income or an expense.
    pub type_: TransactionType,
}

impl TransactionBuilder {
    /// Set the transaction type.
    pub fn transaction_type(mut self, type_: TransactionType) -> Self {
        self.type_ = type_;
        self
    }

    /// Attach `id` to the builder's fields.
    pub fn finalize(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            date: self.date,
            description: self.description,
            type_: self.type_,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
