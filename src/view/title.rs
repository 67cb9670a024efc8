//! Headings that name the period a view covers.
use time::Date;

use crate::view::params::ViewMode;

/// The heading for the period shown in `mode` around `reference_date`.
///
/// For example, "Monday, July 15, 2024" for [ViewMode::Daily], "July 2024"
/// for [ViewMode::Monthly] and "2024" for [ViewMode::Annual].
pub fn view_title(mode: ViewMode, reference_date: Date) -> String {
    match mode {
        ViewMode::Daily => format!(
            "{}, {} {}, {}",
            reference_date.weekday(),
            reference_date.month(),
            reference_date.day(),
            reference_date.year()
        ),
        ViewMode::Monthly => format!("{} {}", reference_date.month(), reference_date.year()),
        ViewMode::Annual => reference_date.year().to_string(),
    }
}
