//! Dropdown selector for choosing a site.

use crate::state::AppState;
use dioxus::prelude::*;

/// Site dropdown selector.
/// Reads site names from AppState and updates selected_site on change; the
/// empty option returns to the welcome overview.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let sites = state.site_names.read().clone();
    let selected = (state.selected_site)().unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if value.is_empty() {
            state.selected_site.set(None);
        } else {
            state.selected_site.set(Some(value));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "site-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Site: "
            }
            select {
                id: "site-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select a site..."
                }
                for site in sites.iter() {
                    option {
                        value: "{site}",
                        selected: *site == selected,
                        "{site}"
                    }
                }
            }
        }
    }
}
