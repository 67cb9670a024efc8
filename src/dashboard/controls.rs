//! The controls for the view mode, reference date and search text.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{CARD_STYLE, FORM_TEXT_INPUT_STYLE},
    view::{ViewMode, ViewParameters},
};

const MODE_BUTTON_STYLE: &str = "px-4 py-2 rounded border text-sm font-medium \
    border-gray-300 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-700";
const ACTIVE_MODE_BUTTON_STYLE: &str = "px-4 py-2 rounded border text-sm font-medium \
    border-blue-600 bg-blue-100 text-blue-800 dark:border-blue-500 \
    dark:bg-blue-600/20 dark:text-blue-200";

const SEARCH_INPUT_ID: &str = "view-search";

/// Renders the view controls and the title of the current view.
///
/// The form is submitted whenever an input changes or a mode button is
/// clicked, and shortly after typing pauses in the search box. Only the
/// clicked mode button sends a mode, while the date and search inputs are
/// always sent.
pub(super) fn view_controls_view(parameters: &ViewParameters, title: &str) -> Markup {
    html! {
        section id="view-controls" class={ (CARD_STYLE) " space-y-4" }
        {
            form
                hx-post=(endpoints::VIEW_API)
                hx-trigger={
                    "submit, change, input changed delay:300ms from:#" (SEARCH_INPUT_ID)
                }
                hx-target-error="#alert-container"
                hx-swap="outerHTML"
                class="space-y-4"
            {
                div class="flex flex-wrap items-center justify-center gap-4"
                {
                    @for mode in ViewMode::ALL {
                        @let (style, pressed) = if mode == parameters.mode {
                            (ACTIVE_MODE_BUTTON_STYLE, "true")
                        } else {
                            (MODE_BUTTON_STYLE, "false")
                        };

                        button
                            type="submit"
                            name="mode"
                            value=(mode.as_query_value())
                            aria-pressed=(pressed)
                            class=(style)
                        {
                            (mode.label())
                        }
                    }

                    input
                        type="date"
                        name="date"
                        aria-label="Reference date"
                        value=(parameters.reference_date)
                        class={ (FORM_TEXT_INPUT_STYLE) " max-w-48" };
                }

                input
                    id=(SEARCH_INPUT_ID)
                    type="search"
                    name="search"
                    placeholder="Search by description..."
                    aria-label="Search transactions by description"
                    value=(parameters.search_query)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            h2 id="view-title" class="text-xl font-bold text-center" { (title) }
        }
    }
}
