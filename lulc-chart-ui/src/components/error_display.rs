//! Dismissable error banner.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message; the close button clears `AppState::error_msg`.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            button {
                style: "border: none; background: none; color: #C62828; cursor: pointer;",
                onclick: move |_| state.error_msg.set(None),
                "x"
            }
        }
    }
}
