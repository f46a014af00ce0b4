use crate::shared::icons::icon_sized;
use contracts::enums::page_identifier::PageIdentifier;
use leptos::prelude::*;

/// Placeholder body for a page; page content itself lives outside the shell.
#[component]
pub fn PageView(#[prop(into)] page: Signal<PageIdentifier>) -> impl IntoView {
    view! {
        <section class="page" data-page=move || page.get().code()>
            <div class="page-header">
                <h1 class="page-header__title">{move || page.get().title()}</h1>
            </div>
            <div class="page__empty">
                {icon_sized("file-text", 32)}
                <p>"Belum ada data untuk ditampilkan."</p>
            </div>
        </section>
    }
}
