//! Dashboard module
//!
//! Provides the tracker page: the transaction form, the view controls, the
//! summary cards, the income versus expense chart and the transaction list.

mod cards;
mod charts;
mod controls;
mod handlers;
mod list;

pub use handlers::get_dashboard_page;
