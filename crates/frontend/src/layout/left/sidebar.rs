//! Collapsible navigation sidebar.
//!
//! Stateless: the parent owns `current_page` and `collapsed` and reacts to the
//! callbacks. Render decisions come from `sidebar_model`.

use super::navigation::{NavigationEntry, NAVIGATION};
use super::sidebar_model::{
    dispatch, rail_class, sidebar_items, SidebarAction, SidebarHandler, SidebarItemView,
    ToggleIndicator,
};
use crate::shared::components::ui::Button;
use crate::shared::components::ScrollArea;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::enums::page_identifier::PageIdentifier;
use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct SidebarCallbacks {
    on_page_change: Callback<PageIdentifier>,
    on_toggle_collapse: Callback<()>,
    on_logout: Callback<()>,
}

impl SidebarHandler for SidebarCallbacks {
    fn page_change(&self, page: PageIdentifier) {
        self.on_page_change.run(page);
    }

    fn toggle_collapse(&self) {
        self.on_toggle_collapse.run(());
    }

    fn logout(&self) {
        self.on_logout.run(());
    }
}

#[component]
pub fn NavigationSidebar(
    /// Page whose entry gets the active treatment
    #[prop(into)]
    current_page: Signal<PageIdentifier>,
    /// Fired on every entry click, including the active one
    on_page_change: Callback<PageIdentifier>,
    /// Narrow icon-only rail when true
    #[prop(into)]
    collapsed: Signal<bool>,
    /// Fired on every toggle click
    on_toggle_collapse: Callback<()>,
    /// Session-termination collaborator behind the logout button
    on_logout: Callback<()>,
    /// Navigation table, defaults to the application pages
    #[prop(optional)]
    entries: Option<&'static [NavigationEntry]>,
    #[prop(optional, into)]
    brand_name: Option<String>,
    #[prop(optional, into)]
    brand_tagline: Option<String>,
) -> impl IntoView {
    let callbacks = SidebarCallbacks {
        on_page_change,
        on_toggle_collapse,
        on_logout,
    };
    let entries = entries.unwrap_or(NAVIGATION);
    let defaults = AppConfig::default();
    let brand_name = brand_name.unwrap_or(defaults.brand_name);
    let brand_tagline = brand_tagline.unwrap_or(defaults.brand_tagline);

    let items = move || {
        let is_collapsed = collapsed.get();
        sidebar_items(entries, current_page.get(), is_collapsed)
            .into_iter()
            .map(|item| view! { <SidebarItem item=item collapsed=is_collapsed callbacks=callbacks /> })
            .collect_view()
    };

    view! {
        <aside data-zone="left" class=move || rail_class(collapsed.get())>
            <div class="app-sidebar__header">
                <div class="app-sidebar__brand">
                    <div class="app-sidebar__logo">{icon("home")}</div>
                    <Show when=move || !collapsed.get()>
                        <div class="app-sidebar__brand-text">
                            <span class="app-sidebar__brand-name">{brand_name.clone()}</span>
                            <span class="app-sidebar__brand-tagline">{brand_tagline.clone()}</span>
                        </div>
                    </Show>
                </div>
                {move || {
                    let indicator = ToggleIndicator::for_state(collapsed.get());
                    view! {
                        <Button
                            variant="ghost"
                            size="icon"
                            class="app-sidebar__toggle"
                            title=indicator.title()
                            on_click=Callback::new(move |_: ev::MouseEvent| dispatch(SidebarAction::ToggleCollapse, &callbacks))
                        >
                            {icon(indicator.icon())}
                        </Button>
                    }
                }}
            </div>

            <ScrollArea class="app-sidebar__content">
                <nav>
                    <ul class="app-sidebar__list">{items}</ul>
                </nav>
            </ScrollArea>

            <div class="app-sidebar__footer">
                <hr class="app-sidebar__divider" />
                {move || {
                    let is_collapsed = collapsed.get();
                    view! {
                        <Button
                            variant="ghost"
                            size=if is_collapsed { "icon" } else { "md" }
                            class="app-sidebar__item app-sidebar__logout"
                            title=if is_collapsed { Some("Keluar".to_string()) } else { None }
                            on_click=Callback::new(move |_: ev::MouseEvent| dispatch(SidebarAction::Logout, &callbacks))
                        >
                            {icon("log-out")}
                            {(!is_collapsed).then(|| view! { <span class="app-sidebar__label">"Keluar"</span> })}
                        </Button>
                    }
                }}
            </div>
        </aside>
    }
}

#[component]
fn SidebarItem(item: SidebarItemView, collapsed: bool, callbacks: SidebarCallbacks) -> impl IntoView {
    let id = item.id;
    let class = item.class();

    view! {
        <li data-page=id.code()>
            <Button
                variant="ghost"
                size=if collapsed { "icon" } else { "md" }
                class=class
                title=item.tooltip.map(str::to_string)
                on_click=Callback::new(move |_: ev::MouseEvent| dispatch(SidebarAction::Navigate(id), &callbacks))
            >
                {icon(item.icon)}
                {item.label.map(|label| view! { <span class="app-sidebar__label">{label}</span> })}
            </Button>
        </li>
    }
}
