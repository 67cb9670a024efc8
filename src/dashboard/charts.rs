//! The income versus expense chart for the current view.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered with a HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip,
        Trigger,
    },
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{html::HeadElement, view::Totals};

const INCOME_COLOUR: &str = "#22c55e";
const EXPENSE_COLOUR: &str = "#ef4444";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

impl DashboardChart {
    /// The chart comparing the income and expense totals.
    pub(super) fn income_expense(totals: &Totals) -> Self {
        Self {
            id: "income-expense-chart",
            options: income_expense_chart(totals).to_string(),
        }
    }
}

/// Renders the HTML container for `chart`.
pub(super) fn chart_view(chart: &DashboardChart) -> Markup {
    html!(
        div
            id=(chart.id)
            class="min-h-[320px] w-full rounded dark:bg-gray-100"
        {}
    )
}

/// Generates JavaScript initialization code for `charts`.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// A bar chart with one category and a bar each for total income and total expense.
pub(super) fn income_expense_chart(totals: &Totals) -> Chart {
    Chart::new()
        .title(Title::new().text("Income vs Expense").left("center"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().bottom(0))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom(40)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(vec!["Summary"]))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            bar::Bar::new()
                .name("Income")
                .item_style(ItemStyle::new().color(INCOME_COLOUR))
                .data(vec![totals.income]),
        )
        .series(
            bar::Bar::new()
                .name("Expense")
                .item_style(ItemStyle::new().color(EXPENSE_COLOUR))
                .data(vec![totals.expense]),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"$0.00\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use crate::{html::HeadElement, view::Totals};

    use super::{DashboardChart, EXPENSE_COLOUR, INCOME_COLOUR, charts_script};

    #[test]
    fn chart_has_income_and_expense_bars() {
        let chart = DashboardChart::income_expense(&Totals {
            income: 3500.0,
            expense: 1350.0,
            net: 2150.0,
        });

        for want in [
            "Income vs Expense",
            "\"Summary\"",
            "\"Income\"",
            "\"Expense\"",
            INCOME_COLOUR,
            EXPENSE_COLOUR,
            "3500",
            "1350",
        ] {
            assert!(
                chart.options.contains(want),
                "want chart options to contain {want:?}, got {}",
                chart.options
            );
        }
    }

    #[test]
    fn script_initialises_chart_by_id() {
        let chart = DashboardChart::income_expense(&Totals::default());

        let HeadElement::ScriptSource(script) = charts_script(&[chart]) else {
            panic!("want inline chart script");
        };

        assert!(script.0.contains("document.getElementById(\"income-expense-chart\")"));
    }
}
