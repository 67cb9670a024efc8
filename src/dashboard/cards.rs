//! Summary cards for the income, expense and net balance of the current view.

use maud::{Markup, html};

use crate::{html::format_currency, view::Totals};

const INCOME_CARD_STYLE: &str = "rounded-lg shadow p-4 bg-green-100 text-green-900 \
    dark:bg-green-900/40 dark:text-green-200";
const EXPENSE_CARD_STYLE: &str = "rounded-lg shadow p-4 bg-red-100 text-red-900 \
    dark:bg-red-900/40 dark:text-red-200";
const SURPLUS_CARD_STYLE: &str = "rounded-lg shadow p-4 bg-blue-100 text-blue-900 \
    dark:bg-blue-900/40 dark:text-blue-200";
const DEFICIT_CARD_STYLE: &str = "rounded-lg shadow p-4 bg-yellow-100 text-yellow-900 \
    dark:bg-yellow-900/40 dark:text-yellow-200";

/// Renders the three summary cards for `totals`.
///
/// The net balance card is blue when the net is zero or more and yellow
/// when it is negative.
pub(super) fn summary_cards_view(totals: &Totals) -> Markup {
    let net_style = if totals.net >= 0.0 {
        SURPLUS_CARD_STYLE
    } else {
        DEFICIT_CARD_STYLE
    };

    html! {
        section id="summary" class="w-full grid grid-cols-1 sm:grid-cols-3 gap-4"
        {
            (summary_card("total-income", "Total Income", totals.income, INCOME_CARD_STYLE))
            (summary_card("total-expense", "Total Expense", totals.expense, EXPENSE_CARD_STYLE))
            (summary_card("net-balance", "Net Balance", totals.net, net_style))
        }
    }
}

fn summary_card(id: &str, label: &str, amount: f64, style: &str) -> Markup {
    html! {
        div id=(id) class=(style)
        {
            h3 class="font-bold" { (label) }
            p class="text-2xl font-mono font-bold" { (format_currency(amount)) }
        }
    }
}
