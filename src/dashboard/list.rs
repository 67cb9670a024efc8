//! The list of transactions in the current view.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints,
    html::{CARD_STYLE, format_amount, link},
    transaction::{Transaction, TransactionType},
};

/// The max number of graphemes to display in the list before truncating and
/// displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

fn amount_class(type_: TransactionType) -> &'static str {
    match type_ {
        TransactionType::Income => "text-green-700 dark:text-green-300",
        TransactionType::Expense => "text-red-700 dark:text-red-300",
    }
}

fn amount_sign(type_: TransactionType) -> &'static str {
    match type_ {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    }
}

/// Renders `transactions` in the given order with an edit link for each.
pub(super) fn transaction_list_view(transactions: &[Transaction]) -> Markup {
    html! {
        section id="transactions" class=(CARD_STYLE)
        {
            h3 class="text-lg font-bold mb-2 text-center" { "Transactions" }

            @if transactions.is_empty() {
                p class="text-center text-gray-500 dark:text-gray-400 p-4"
                {
                    "No transactions for this period."
                }
            } @else {
                ul class="max-h-80 overflow-y-auto divide-y divide-gray-200 dark:divide-gray-700"
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let (description, full_description) = format_description(&transaction.description);
    let edit_url = endpoints::edit_transaction_view(transaction.id);

    html! {
        li
            data-transaction-id=(transaction.id)
            class="flex justify-between items-center gap-4 py-2"
        {
            div class="grow min-w-0"
            {
                p class="font-bold" title=[full_description] { (description) }
                p class="text-sm text-gray-600 dark:text-gray-400" { (transaction.date) }
            }

            div class="flex items-center gap-4 shrink-0"
            {
                span class={ "font-mono font-bold " (amount_class(transaction.type_)) }
                {
                    (amount_sign(transaction.type_)) "$" (format_amount(transaction.amount))
                }

                (link(&edit_url, "Edit"))
            }
        }
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        (truncated + "...", Some(description))
    }
}
