pub mod center;
pub mod global_context;
pub mod left;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// |  (fixed)  |  (offset by the rail width)  |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            {left()}
            <center::Center>
                {center()}
            </center::Center>
        </div>
    }
}
