use leptos::prelude::*;
use lespro_core::Section;
use lespro_core::content::SITE;

use crate::components::Icon;
use crate::dom::scroll_to_section;

#[component]
pub fn Nav() -> impl IntoView {
    let links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    type="button"
                    class="nav-link"
                    on:click=move |_| scroll_to_section(section.id())
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="nav">
            <div class="container">
                <div class="nav-inner">
                    <div class="nav-brand">
                        <Icon name="tree-pine" size=28 class="text-secondary" />
                        <span class="nav-title">{SITE.brand}</span>
                    </div>

                    <nav class="nav-links">{links}</nav>

                    // The callback form lives in the contacts section
                    <button
                        type="button"
                        class="btn btn-secondary nav-cta"
                        on:click=move |_| scroll_to_section(Section::Contacts.id())
                    >
                        <Icon name="phone" size=16 class="mr-2" />
                        "Заказать звонок"
                    </button>
                </div>
            </div>
        </header>
    }
}
