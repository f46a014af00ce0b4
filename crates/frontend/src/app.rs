use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Shell view state and config for the whole app via context.
    provide_context(AppGlobalContext::new(&config));
    provide_context(config);

    view! {
        <AppShell />
    }
}
