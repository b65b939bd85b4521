//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The dataset itself holds no "current site" or selection; both live here
//! and are passed into every query explicitly.

use dioxus::prelude::*;
use lulc_core::SelectedCategories;
use lulc_data::{DashboardSettings, Dataset};

/// Shared application state for the land-use dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Normalized survey data (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Years, thresholds and narrative candidates
    pub settings: Signal<DashboardSettings>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected site; None shows the welcome overview
    pub selected_site: Signal<Option<String>>,
    /// Site names for the dropdown, in sheet order
    pub site_names: Signal<Vec<String>>,
    /// Categories currently toggled on
    pub selection: Signal<SelectedCategories>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let settings = DashboardSettings::default();
        Self {
            dataset: Signal::new(None),
            selection: Signal::new(settings.selection()),
            settings: Signal::new(settings),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(None),
            site_names: Signal::new(Vec::new()),
        }
    }

    /// Install a freshly built dataset and reset the site list.
    pub fn install_dataset(&mut self, dataset: Dataset) {
        let names = dataset.site_names_in_order();
        log::info!("[LULC] dataset ready with {} sites", names.len());
        if names.is_empty() {
            self.error_msg.set(Some("No land use data available.".to_string()));
        }
        self.site_names.set(names);
        self.dataset.set(Some(dataset));
        self.loading.set(false);
    }
}
