//! Selecting, sorting and totalling the transactions to display.
//!
//! This module contains:
//! - [ViewParameters], the mode, reference date and search text
//! - The pure pipeline that derives the visible transactions and totals
//! - The title for the current view
//! - The endpoint for changing the view parameters

mod endpoint;
mod params;
mod pipeline;
mod title;

pub use endpoint::update_view_endpoint;
pub use params::{ViewMode, ViewParameters};
pub use pipeline::{
    DerivedView, Totals, compute_totals, derive_view, filter_transactions, matches_period,
    matches_search, sort_by_date_desc,
};
pub use title::view_title;
