use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Main content zone; its left offset follows the sidebar rail width.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <main
            data-zone="center"
            class="app-main"
            class:app-main--rail-collapsed=move || ctx.sidebar_collapsed.get()
        >
            {children()}
        </main>
    }
}
