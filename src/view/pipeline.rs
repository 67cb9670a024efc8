//! Turns the stored transactions and the view parameters into the visible
//! transactions and their totals.
//!
//! Everything here is a pure function of its arguments. Running
//! [derive_view] twice with the same input yields equal output, so callers
//! are free to cache the result keyed on the input.

use serde::Serialize;
use time::Date;

use crate::{
    transaction::{Transaction, TransactionType},
    view::params::{ViewMode, ViewParameters},
};

/// The sums of the visible transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    /// The sum of all income.
    pub income: f64,
    /// The sum of all expenses.
    pub expense: f64,
    /// Income minus expenses.
    pub net: f64,
}

/// The transactions to display and their totals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedView {
    /// The transactions that match the view parameters, most recent first.
    pub visible_transactions: Vec<Transaction>,
    /// The totals of [DerivedView::visible_transactions].
    pub totals: Totals,
}

/// Filter, sort and total `transactions` according to `parameters`.
///
/// An empty result is a normal outcome: the list is empty and all totals are
/// zero.
pub fn derive_view(transactions: &[Transaction], parameters: &ViewParameters) -> DerivedView {
    let mut visible_transactions = filter_transactions(transactions, parameters);
    sort_by_date_desc(&mut visible_transactions);
    let totals = compute_totals(&visible_transactions);

    DerivedView {
        visible_transactions,
        totals,
    }
}

/// Keep the transactions that fall in the period selected by `parameters`
/// and whose description contains the search query.
///
/// The relative order of `transactions` is preserved.
pub fn filter_transactions(
    transactions: &[Transaction],
    parameters: &ViewParameters,
) -> Vec<Transaction> {
    let query = parameters.search_query.to_lowercase();

    transactions
        .iter()
        .filter(|transaction| {
            matches_period(transaction.date, parameters.mode, parameters.reference_date)
        })
        .filter(|transaction| {
            query.is_empty() || contains_lowercase(&transaction.description, &query)
        })
        .cloned()
        .collect()
}

/// Whether `date` is in the same day, month or year as `reference_date`,
/// depending on `mode`.
pub fn matches_period(date: Date, mode: ViewMode, reference_date: Date) -> bool {
    match mode {
        ViewMode::Daily => date == reference_date,
        ViewMode::Monthly => {
            date.year() == reference_date.year() && date.month() == reference_date.month()
        }
        ViewMode::Annual => date.year() == reference_date.year(),
    }
}

/// Whether `description` contains `query`, ignoring case.
///
/// An empty `query` matches every description.
pub fn matches_search(description: &str, query: &str) -> bool {
    query.is_empty() || contains_lowercase(description, &query.to_lowercase())
}

fn contains_lowercase(text: &str, lowercase_query: &str) -> bool {
    text.to_lowercase().contains(lowercase_query)
}

/// Sort `transactions` so the most recent comes first.
///
/// Transactions on the same date keep their relative order.
pub fn sort_by_date_desc(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Sum income and expenses separately.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let (income, expense) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expense), transaction| {
                match transaction.type_ {
                    TransactionType::Income => (income + transaction.amount, expense),
                    TransactionType::Expense => (income, expense + transaction.amount),
                }
            });

    Totals {
        income,
        expense,
        net: income - expense,
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::{
        transaction::{Transaction, TransactionBuilder, TransactionStore, TransactionType},
        view::{
            params::{ViewMode, ViewParameters},
            pipeline::{
                DerivedView, Totals, compute_totals, derive_view, filter_transactions,
                matches_period, matches_search,
            },
        },
    };

    fn income(amount: f64, date: Date, description: &str) -> TransactionBuilder {
        Transaction::build(amount, date, description).transaction_type(TransactionType::Income)
    }

    fn expense(amount: f64, date: Date, description: &str) -> TransactionBuilder {
        Transaction::build(amount, date, description).transaction_type(TransactionType::Expense)
    }

    fn demo_store() -> TransactionStore {
        let mut store = TransactionStore::new();
        store.add(income(3000.0, date!(2024 - 07 - 15), "Salary"));
        store.add(expense(150.0, date!(2024 - 07 - 15), "Groceries"));
        store.add(income(500.0, date!(2024 - 07 - 16), "Freelance Work"));
        store.add(expense(1200.0, date!(2024 - 07 - 20), "Rent"));
        store.add(expense(60.0, date!(2024 - 06 - 10), "Internet Bill"));
        store.add(income(1000.0, date!(2023 - 12 - 25), "Christmas Bonus"));
        store
    }

    fn descriptions(view: &DerivedView) -> Vec<&str> {
        view.visible_transactions
            .iter()
            .map(|transaction| transaction.description.as_str())
            .collect()
    }

    #[test]
    fn daily_view_keeps_exact_date() {
        let mut store = TransactionStore::new();
        store.add(income(3000.0, date!(2024 - 07 - 15), "Salary"));
        store.add(expense(150.0, date!(2024 - 07 - 15), "Groceries"));
        let parameters = ViewParameters::new(ViewMode::Daily, date!(2024 - 07 - 15));

        let view = derive_view(store.transactions(), &parameters);

        assert_eq!(descriptions(&view), ["Salary", "Groceries"]);
        assert_eq!(
            view.totals,
            Totals {
                income: 3000.0,
                expense: 150.0,
                net: 2850.0
            }
        );
    }

    #[test]
    fn monthly_view_keeps_same_year_and_month() {
        let store = demo_store();
        let parameters = ViewParameters::new(ViewMode::Monthly, date!(2024 - 07 - 20));

        let view = derive_view(store.transactions(), &parameters);

        assert_eq!(
            descriptions(&view),
            ["Rent", "Freelance Work", "Salary", "Groceries"]
        );
        assert_eq!(
            view.totals,
            Totals {
                income: 3500.0,
                expense: 1350.0,
                net: 2150.0
            }
        );
    }

    #[test]
    fn annual_view_keeps_same_year() {
        let store = demo_store();
        let parameters = ViewParameters::new(ViewMode::Annual, date!(2023 - 01 - 01));

        let view = derive_view(store.transactions(), &parameters);

        assert_eq!(descriptions(&view), ["Christmas Bonus"]);
        assert_eq!(
            view.totals,
            Totals {
                income: 1000.0,
                expense: 0.0,
                net: 1000.0
            }
        );
    }

    #[test]
    fn monthly_view_ignores_same_month_in_other_years() {
        let mut store = TransactionStore::new();
        store.add(expense(10.0, date!(2023 - 07 - 15), "Last year"));
        store.add(expense(20.0, date!(2024 - 07 - 01), "This year"));
        let parameters = ViewParameters::new(ViewMode::Monthly, date!(2024 - 07 - 31));

        let view = derive_view(store.transactions(), &parameters);

        assert_eq!(descriptions(&view), ["This year"]);
    }

    #[test]
    fn search_ignores_case() {
        let store = demo_store();
        let parameters =
            ViewParameters::new(ViewMode::Monthly, date!(2024 - 07 - 01)).search("rENt");

        let view = derive_view(store.transactions(), &parameters);

        assert_eq!(descriptions(&view), ["Rent"]);
        assert_eq!(view.totals.expense, 1200.0);
        assert_eq!(view.totals.income, 0.0);
    }

    #[test]
    fn search_matches_substrings() {
        assert!(matches_search("Rent", "rent"));
        assert!(matches_search("Freelance Work", "ANCE w"));
        assert!(!matches_search("Groceries", "rent"));
        assert!(matches_search("Groceries", ""));
    }

    #[test]
    fn empty_search_matches_date_filter_alone() {
        let store = demo_store();
        let reference_date = date!(2024 - 07 - 20);

        for mode in ViewMode::ALL {
            let parameters = ViewParameters::new(mode, reference_date);
            let want: Vec<_> = store
                .transactions()
                .iter()
                .filter(|transaction| matches_period(transaction.date, mode, reference_date))
                .cloned()
                .collect();

            let got = filter_transactions(store.transactions(), &parameters);

            assert_eq!(got, want, "mode {mode:?}");
        }
    }

    #[test]
    fn search_with_no_matches_yields_empty_view() {
        let store = demo_store();
        let parameters =
            ViewParameters::new(ViewMode::Annual, date!(2024 - 01 - 01)).search("yacht");

        let view = derive_view(store.transactions(), &parameters);

        assert_eq!(view, DerivedView::default());
    }

    #[test]
    fn empty_store_yields_zero_totals() {
        let parameters = ViewParameters::new(ViewMode::Daily, date!(2024 - 07 - 15));

        let view = derive_view(&[], &parameters);

        assert!(view.visible_transactions.is_empty());
        assert_eq!(view.totals, Totals::default());
    }

    #[test]
    fn visible_transactions_are_sorted_most_recent_first() {
        let store = demo_store();

        for mode in ViewMode::ALL {
            let parameters = ViewParameters::new(mode, date!(2024 - 07 - 20));

            let view = derive_view(store.transactions(), &parameters);

            assert!(
                view.visible_transactions
                    .windows(2)
                    .all(|pair| pair[0].date >= pair[1].date),
                "mode {mode:?} is not sorted: {:?}",
                descriptions(&view)
            );
        }
    }

    #[test]
    fn same_date_keeps_insertion_order() {
        let mut store = TransactionStore::new();
        store.add(expense(1.0, date!(2024 - 07 - 15), "First"));
        store.add(expense(2.0, date!(2024 - 07 - 16), "Later"));
        store.add(expense(3.0, date!(2024 - 07 - 15), "Second"));
        let parameters = ViewParameters::new(ViewMode::Monthly, date!(2024 - 07 - 15));

        let view = derive_view(store.transactions(), &parameters);

        assert_eq!(descriptions(&view), ["Later", "First", "Second"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let store = demo_store();

        for mode in ViewMode::ALL {
            let parameters = ViewParameters::new(mode, date!(2024 - 07 - 15)).search("a");

            let once = filter_transactions(store.transactions(), &parameters);
            let twice = filter_transactions(&once, &parameters);

            assert_eq!(once, twice, "mode {mode:?}");
        }
    }

    #[test]
    fn net_is_income_minus_expense() {
        let store = demo_store();
        let reference_dates = [
            date!(2024 - 07 - 15),
            date!(2024 - 06 - 10),
            date!(2023 - 12 - 25),
            date!(2022 - 01 - 01),
        ];

        for reference_date in reference_dates {
            for mode in ViewMode::ALL {
                let parameters = ViewParameters::new(mode, reference_date);

                let totals = derive_view(store.transactions(), &parameters).totals;

                assert_eq!(totals.income - totals.expense, totals.net);
            }
        }
    }

    #[test]
    fn added_transaction_is_visible() {
        let mut store = demo_store();
        let parameters = ViewParameters::new(ViewMode::Daily, date!(2024 - 08 - 01));

        let transaction = store.add(expense(4.5, date!(2024 - 08 - 01), "Coffee"));
        let view = derive_view(store.transactions(), &parameters);

        assert_eq!(view.visible_transactions, [transaction]);
        assert_eq!(view.totals.net, -4.5);
    }

    #[test]
    fn derive_view_is_deterministic() {
        let store = demo_store();
        let parameters = ViewParameters::new(ViewMode::Annual, date!(2024 - 02 - 29));

        let first = derive_view(store.transactions(), &parameters);
        let second = derive_view(store.transactions(), &parameters);

        assert_eq!(first, second);
    }

    #[test]
    fn totals_of_nothing_are_zero() {
        assert_eq!(compute_totals(&[]), Totals::default());
    }
}
