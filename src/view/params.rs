//! The parameters that select which transactions are visible.

use serde::Deserialize;
use time::Date;

/// The granularity of the date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Transactions on the reference date.
    Daily,
    /// Transactions in the same month and year as the reference date.
    #[default]
    Monthly,
    /// Transactions in the same year as the reference date.
    Annual,
}

impl ViewMode {
    /// Every view mode, in the order they are displayed.
    pub const ALL: [ViewMode; 3] = [ViewMode::Daily, ViewMode::Monthly, ViewMode::Annual];

    /// The value used for this mode in query strings and forms.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }

    /// The human readable name of the mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }
}

/// The mode, reference date and search text that the visible transactions
/// are derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewParameters {
    /// Which date filter to apply.
    pub mode: ViewMode,
    /// The anchor date for the date filter.
    pub reference_date: Date,
    /// Text that descriptions must contain, ignoring case. Empty matches
    /// everything.
    pub search_query: String,
}

impl ViewParameters {
    /// Create view parameters with an empty search query.
    pub fn new(mode: ViewMode, reference_date: Date) -> Self {
        Self {
            mode,
            reference_date,
            search_query: String::new(),
        }
    }

    /// Set the search query.
    pub fn search(mut self, search_query: &str) -> Self {
        self.search_query = search_query.to_owned();
        self
    }
}
