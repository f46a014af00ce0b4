use crate::shared::class_names::class_names;
use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost) and sizes (md, sm, icon)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm", or "icon" for square icon-only buttons
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Tooltip / accessible title
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let button_class = move || {
        let extra = class.get().unwrap_or_default();
        class_names(&[
            ("button", true),
            (variant_class(variant.get().as_deref()), true),
            (size_class(size.get().as_deref()), true),
            (extra.as_str(), true),
        ])
    };

    view! {
        <button
            type="button"
            class=button_class
            title=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    }
}

fn size_class(size: Option<&str>) -> &'static str {
    match size {
        Some("sm") => "button--small",
        Some("icon") => "button--icon",
        _ => "",
    }
}
