//! Application shell: owns nothing itself, wires the sidebar to the
//! `AppGlobalContext` view state.

use crate::layout::center::PageView;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::NavigationSidebar;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::system::session::end_session;
use contracts::enums::page_identifier::PageIdentifier;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let config =
        leptos::context::use_context::<AppConfig>().expect("AppConfig context not found");

    let on_page_change = Callback::new(move |page: PageIdentifier| ctx.navigate_to(page));
    let on_toggle_collapse = Callback::new(move |_: ()| ctx.toggle_sidebar());
    let logout_config = config.clone();
    let on_logout = Callback::new(move |_: ()| end_session(&ctx, &logout_config));

    let brand_name = config.brand_name.clone();
    let brand_tagline = config.brand_tagline.clone();

    view! {
        <Shell
            left=move || view! {
                <NavigationSidebar
                    current_page=ctx.current_page
                    on_page_change=on_page_change
                    collapsed=ctx.sidebar_collapsed
                    on_toggle_collapse=on_toggle_collapse
                    on_logout=on_logout
                    brand_name=brand_name.clone()
                    brand_tagline=brand_tagline.clone()
                />
            }.into_any()
            center=move || view! { <PageView page=ctx.current_page /> }.into_any()
        />
    }
}
