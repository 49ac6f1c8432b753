use leptos::prelude::*;
use lespro_core::content::SITE;

use crate::components::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <Icon name="tree-pine" size=24 class="text-secondary" />
                    <span class="footer-title">{SITE.brand}</span>
                </div>
                <p class="footer-copyright">{SITE.copyright()}</p>
            </div>
        </footer>
    }
}
