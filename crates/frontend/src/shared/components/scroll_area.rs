use crate::shared::class_names::class_names;
use leptos::prelude::*;

/// Vertically scrollable region that fills the remaining height of a flex column.
#[component]
pub fn ScrollArea(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let area_class = move || {
        let extra = class.get().unwrap_or_default();
        class_names(&[("scroll-area", true), (extra.as_str(), true)])
    };

    view! {
        <div class=area_class>
            <div class="scroll-area__viewport">{children()}</div>
        </div>
    }
}
