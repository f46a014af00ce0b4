use crate::shared::config::AppConfig;
use contracts::enums::page_identifier::PageIdentifier;
use leptos::prelude::*;

/// View state of the application shell: which page is shown and whether the
/// sidebar is the narrow rail. The sidebar only reads it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_page: RwSignal<PageIdentifier>,
    pub sidebar_collapsed: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            current_page: RwSignal::new(config.default_page),
            sidebar_collapsed: RwSignal::new(config.start_collapsed),
        }
    }

    pub fn navigate_to(&self, page: PageIdentifier) {
        log::debug!("navigate_to: page='{}'", page);
        self.current_page.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|collapsed| *collapsed = !*collapsed);
        log::debug!(
            "toggle_sidebar: collapsed={}",
            self.sidebar_collapsed.get_untracked()
        );
    }

    /// Back to the startup page with the configured rail width.
    pub fn reset(&self, config: &AppConfig) {
        self.current_page.set(config.default_page);
        self.sidebar_collapsed.set(config.start_collapsed);
    }
}
