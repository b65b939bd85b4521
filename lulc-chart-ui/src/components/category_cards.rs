//! Toggle cards for the seven land-use categories.

use crate::state::AppState;
use dioxus::prelude::*;
use lulc_core::{Category, SelectedCategories};
use lulc_data::models::CategoryPercent;
use lulc_utils::format;

/// One card per category showing the latest-year share for the selected site.
/// Clicking a card toggles the category in the selection.
#[component]
pub fn CategoryCards() -> Element {
    let state = use_context::<AppState>();
    let selection = state.selection.read().clone();
    let latest = state.settings.read().latest_year;
    let site = (state.selected_site)();

    let cards: Vec<CategoryPercent> = {
        let dataset = state.dataset.read();
        site.as_deref()
            .zip(dataset.as_ref())
            .and_then(|(site, dataset)| dataset.category_percentages(site, latest, &selection))
            .unwrap_or_else(|| placeholder_cards(&selection))
    };
    let has_values = site.is_some();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 8px; margin: 12px 0;",
            for card in cards {
                CategoryCard { card, show_value: has_values }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CategoryCardProps {
    card: CategoryPercent,
    /// False until a site is selected; the card then shows "--"
    show_value: bool,
}

#[component]
fn CategoryCard(props: CategoryCardProps) -> Element {
    let mut state = use_context::<AppState>();
    let category = props.card.category;
    let color = category.color();
    let border = if props.card.selected { color } else { "#ddd" };
    let opacity = if props.card.selected { "1" } else { "0.45" };
    let value = if props.show_value {
        card_percent(props.card.percent)
    } else {
        "--".to_string()
    };

    rsx! {
        div {
            style: "cursor: pointer; padding: 8px; border-radius: 6px; border: 2px solid {border}; opacity: {opacity}; text-align: center;",
            onclick: move |_| {
                let now_selected = state.selection.write().toggle(category);
                log::debug!("[LULC] {} selected: {}", category, now_selected);
            },
            i { class: "{props.card.icon}", style: "color: {color}; font-size: 18px;" }
            div { style: "font-size: 12px; margin-top: 4px;", "{props.card.label}" }
            div { style: "font-size: 16px; font-weight: bold;", "{value}" }
        }
    }
}

fn placeholder_cards(selection: &SelectedCategories) -> Vec<CategoryPercent> {
    Category::registry()
        .iter()
        .map(|info| CategoryPercent {
            category: info.category,
            label: info.label.to_string(),
            icon: info.icon.to_string(),
            percent: 0.0,
            selected: selection.is_selected(info.category),
        })
        .collect()
}

/// Card value with two decimals, e.g. `"0.04%"`.
fn card_percent(percent: f64) -> String {
    format!("{}%", format::fixed(percent, 2))
}
