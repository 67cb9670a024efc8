//! The in-memory collection of transactions.

use crate::transaction::core::{Transaction, TransactionBuilder, TransactionId};

/// Holds every transaction the user has recorded, in insertion order.
///
/// The store does not validate its input, callers must only pass complete
/// records. Nothing relies on the storage order: display order is always
/// derived by [derive_view](crate::derive_view).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    last_id: u64,
    revision: u64,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh ID to `builder`, append it and return the stored record.
    pub fn add(&mut self, builder: TransactionBuilder) -> Transaction {
        self.last_id += 1;
        let transaction = builder.finalize(TransactionId::new(self.last_id));

        self.transactions.push(transaction.clone());
        self.revision += 1;

        transaction
    }

    /// Replace the stored transaction that has the same ID as `transaction`.
    ///
    /// The replaced record keeps its position. If no transaction has that ID
    /// the store is left untouched and `false` is returned.
    pub fn update(&mut self, transaction: Transaction) -> bool {
        let Some(existing) = self
            .transactions
            .iter_mut()
            .find(|existing| existing.id == transaction.id)
        else {
            return false;
        };

        *existing = transaction;
        self.revision += 1;

        true
    }

    /// Get the transaction with the ID `id`.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// A counter that changes every time the contents of the store change.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
