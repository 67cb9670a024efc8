//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The in-memory `TransactionStore`
//! - The form and the endpoints for adding and editing transactions

mod core;
mod create_endpoint;
mod edit_endpoint;
mod form;
mod store;

pub use self::core::{Transaction, TransactionBuilder, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub(crate) use form::{TransactionFormDefaults, transaction_form_view};
pub use store::TransactionStore;
