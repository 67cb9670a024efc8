//! Alert system for displaying error messages to users.
//!
//! Alerts are swapped into the page's alert container by htmx, so they
//! carry the container's id and fixed position themselves.

use maud::{Markup, html};

/// A dismissible message shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An error message with extra details.
    Error { message: String, details: String },
    /// An error message on its own.
    ErrorSimple { message: String },
}

const ALERT_CONTAINER_STYLE: &str = "w-full max-w-md px-4";
const ALERT_CONTAINER_POSITION: &str =
    "position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;";

const ERROR_STYLE: &str = "flex items-start p-4 mb-4 text-red-800 rounded-lg \
    bg-red-50 dark:bg-gray-800 dark:text-red-400 border border-red-300 \
    dark:border-red-800 shadow";

impl Alert {
    /// Render the alert as the contents of the page's alert container.
    pub fn into_html(self) -> Markup {
        let (message, details) = match self {
            Alert::Error { message, details } => (message, details),
            Alert::ErrorSimple { message } => (message, String::new()),
        };

        html! {
            div
                id="alert-container"
                class=(ALERT_CONTAINER_STYLE)
                style=(ALERT_CONTAINER_POSITION)
            {
                div class=(ERROR_STYLE) role="alert"
                {
                    div class="ms-3 text-sm"
                    {
                        p class="font-medium" { (message) }

                        @if !details.is_empty() {
                            p class="mt-1" { (details) }
                        }
                    }

                    button
                        type="button"
                        class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex items-center justify-center h-8 w-8"
                        aria-label="Close"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "✕"
                    }
                }
            }
        }
    }
}
