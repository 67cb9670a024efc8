//! The form for adding a transaction or editing an existing one.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, format_amount,
    },
    transaction::core::{Transaction, TransactionBuilder, TransactionId, TransactionType},
};

/// The form data for creating or updating a transaction.
///
/// Every field is optional so that a blank field can be reported as
/// [Error::MissingField] instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    pub description: Option<String>,
    /// The value of the transaction in dollars.
    pub amount: Option<f64>,
    /// The date when the transaction occurred.
    pub date: Option<Date>,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type_")]
    pub transaction_type: Option<TransactionType>,
}

impl TransactionForm {
    /// Check that every field is filled in and the amount is usable.
    ///
    /// The description is trimmed before it is checked and stored. A missing
    /// type defaults to [TransactionType::Expense].
    ///
    /// # Errors
    /// Returns [Error::MissingField] for the first blank field, or
    /// [Error::InvalidAmount] if the amount is negative or not finite.
    pub fn validate(self) -> Result<TransactionBuilder, Error> {
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|description| !description.is_empty())
            .ok_or(Error::MissingField("description"))?;
        let amount = self.amount.ok_or(Error::MissingField("amount"))?;
        let date = self.date.ok_or(Error::MissingField("date"))?;

        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        Ok(Transaction::build(amount, date, description)
            .transaction_type(self.transaction_type.unwrap_or_default()))
    }
}

/// The initial values of the transaction form.
pub struct TransactionFormDefaults<'a> {
    pub transaction_type: TransactionType,
    pub amount: Option<f64>,
    pub date: Date,
    pub description: Option<&'a str>,
}

impl TransactionFormDefaults<'_> {
    /// An empty form for a new expense on `date`.
    pub fn blank(date: Date) -> Self {
        Self {
            transaction_type: TransactionType::default(),
            amount: None,
            date,
            description: None,
        }
    }
}

impl<'a> From<&'a Transaction> for TransactionFormDefaults<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            transaction_type: transaction.type_,
            amount: Some(transaction.amount),
            date: transaction.date,
            description: Some(&transaction.description),
        }
    }
}

/// Render the transaction form.
///
/// With `editing` set, the form updates that transaction and offers a cancel
/// link, otherwise it adds a new transaction.
pub fn transaction_form_view(
    defaults: &TransactionFormDefaults<'_>,
    editing: Option<TransactionId>,
) -> Markup {
    let amount_str = defaults.amount.map(format_amount);
    let update_endpoint =
        editing.map(|id| endpoints::format_endpoint(endpoints::TRANSACTION, id));

    html! {
        form
            id="transaction-form"
            hx-post=[editing.is_none().then_some(endpoints::TRANSACTIONS_API)]
            hx-put=[update_endpoint.as_deref()]
            hx-target-error="#alert-container"
            hx-swap="outerHTML"
            class="w-full space-y-4"
        {
            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="e.g., Coffee"
                    required
                    value=[defaults.description]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="grid grid-cols-2 gap-4"
            {
                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Amount ($)"
                    }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="e.g., 4.50"
                        required
                        value=[amount_str.as_deref()]
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="date"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Date"
                    }

                    input
                        name="date"
                        id="date"
                        type="date"
                        value=(defaults.date)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Transaction type" }

                div class="flex gap-3"
                {
                    @for transaction_type in [TransactionType::Expense, TransactionType::Income] {
                        @let input_id = format!("transaction-type-{}", transaction_type.as_form_value());

                        div class="flex flex-1 items-center gap-3"
                        {
                            input
                                name="type_"
                                id=(input_id)
                                type="radio"
                                value=(transaction_type.as_form_value())
                                checked[transaction_type == defaults.transaction_type]
                                required
                                class=(FORM_RADIO_INPUT_STYLE);

                            label
                                for=(input_id)
                                class=(FORM_RADIO_LABEL_STYLE)
                            {
                                (transaction_type.label())
                            }
                        }
                    }
                }
            }

            @if editing.is_some() {
                div class="flex gap-4"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Update" }

                    a href=(endpoints::ROOT) class=(BUTTON_SECONDARY_STYLE) { "Cancel" }
                }
            } @else {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use super::{TransactionForm, TransactionFormDefaults, transaction_form_view};
    use crate::{
        Error, endpoints,
        test_utils::{
            assert_form_input, assert_form_input_with_value, assert_form_submit_button_with_text,
            assert_hx_endpoint, assert_valid_html, must_get_form,
        },
        transaction::{Transaction, TransactionId, TransactionType},
    };

    fn filled_form() -> TransactionForm {
        TransactionForm {
            description: Some("Groceries".to_owned()),
            amount: Some(150.0),
            date: Some(date!(2024 - 07 - 15)),
            transaction_type: Some(TransactionType::Expense),
        }
    }

    #[test]
    fn validate_accepts_filled_form() {
        let builder = filled_form().validate();

        assert_eq!(
            builder,
            Ok(Transaction::build(150.0, date!(2024 - 07 - 15), "Groceries"))
        );
    }

    #[test]
    fn validate_trims_description() {
        let form = TransactionForm {
            description: Some("  Rent ".to_owned()),
            ..filled_form()
        };

        let builder = form.validate().expect("form should be valid");

        assert_eq!(builder.description, "Rent");
    }

    #[test]
    fn validate_rejects_blank_description() {
        let form = TransactionForm {
            description: Some("   ".to_owned()),
            ..filled_form()
        };

        assert_eq!(form.validate(), Err(Error::MissingField("description")));
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let cases = [
            (
                TransactionForm {
                    amount: None,
                    ..filled_form()
                },
                "amount",
            ),
            (
                TransactionForm {
                    date: None,
                    ..filled_form()
                },
                "date",
            ),
            (TransactionForm::default(), "description"),
        ];

        for (form, want_field) in cases {
            assert_eq!(form.validate(), Err(Error::MissingField(want_field)));
        }
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let form = TransactionForm {
            amount: Some(-5.0),
            ..filled_form()
        };

        assert_eq!(form.validate(), Err(Error::InvalidAmount(-5.0)));
    }

    #[test]
    fn validate_defaults_to_expense() {
        let form = TransactionForm {
            transaction_type: None,
            ..filled_form()
        };

        let builder = form.validate().expect("form should be valid");

        assert_eq!(builder.type_, TransactionType::Expense);
    }

    #[test]
    fn form_deserialises() {
        let form: TransactionForm = serde_html_form::from_str(
            "description=Salary&amount=3000&date=2024-07-15&type_=income",
        )
        .unwrap();

        assert_eq!(
            form.validate(),
            Ok(Transaction::build(3000.0, date!(2024 - 07 - 15), "Salary")
                .transaction_type(TransactionType::Income))
        );
    }

    #[test]
    fn empty_fields_deserialise_as_missing() {
        let form: TransactionForm =
            serde_html_form::from_str("description=Rent&amount=&date=2024-07-20&type_=expense")
                .unwrap();

        assert_eq!(form.amount, None);
        assert_eq!(form.validate(), Err(Error::MissingField("amount")));
    }

    #[test]
    fn add_form_posts_to_transactions_api() {
        let defaults = TransactionFormDefaults::blank(date!(2024 - 07 - 15));
        let html = Html::parse_fragment(&transaction_form_view(&defaults, None).into_string());
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::TRANSACTIONS_API, "hx-post");
        assert_form_input(&form, "description", "text");
        assert_form_input(&form, "amount", "number");
        assert_form_input_with_value(&form, "date", "date", "2024-07-15");
        assert_form_submit_button_with_text(&form, "Add Transaction");
    }

    #[test]
    fn edit_form_puts_to_transaction_endpoint() {
        let transaction = Transaction::build(3000.0, date!(2024 - 07 - 15), "Salary")
            .transaction_type(TransactionType::Income)
            .finalize(TransactionId::new(4));
        let defaults = TransactionFormDefaults::from(&transaction);
        let html = Html::parse_fragment(
            &transaction_form_view(&defaults, Some(transaction.id)).into_string(),
        );
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/api/transactions/4", "hx-put");
        assert_form_input_with_value(&form, "description", "text", "Salary");
        assert_form_input_with_value(&form, "amount", "number", "3000.00");
        assert_form_submit_button_with_text(&form, "Update");

        let cancel_selector = Selector::parse("a").unwrap();
        let cancel = form
            .select(&cancel_selector)
            .next()
            .expect("could not find cancel link");
        assert_eq!(cancel.value().attr("href"), Some(endpoints::ROOT));
    }

    #[test]
    fn checks_selected_type() {
        let cases = [
            (TransactionType::Expense, "expense"),
            (TransactionType::Income, "income"),
        ];

        for (transaction_type, expected) in cases {
            let defaults = TransactionFormDefaults {
                transaction_type,
                ..TransactionFormDefaults::blank(date!(2024 - 07 - 15))
            };
            let html = Html::parse_fragment(&transaction_form_view(&defaults, None).into_string());

            let selector = Selector::parse("input[type=radio][name=type_]").unwrap();
            let checked = html
                .select(&selector)
                .find(|input| input.value().attr("checked").is_some())
                .and_then(|input| input.value().attr("value"));
            assert_eq!(
                checked,
                Some(expected),
                "want checked transaction type to be {expected}, got {checked:?}"
            );
        }
    }
}
