//! Reusable Dioxus RSX components for the land-use dashboard.

mod category_cards;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod narrative_panel;
mod site_selector;
mod timeline_strip;

pub use category_cards::CategoryCards;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use narrative_panel::NarrativePanel;
pub use site_selector::SiteSelector;
pub use timeline_strip::TimelineStrip;
