// ЛесПром Landing Page, Leptos 0.8 Edition

mod components;
mod dom;
mod logging;
mod sections;

use std::sync::Arc;

use leptos::prelude::*;
use lespro_core::Catalog;
use lespro_core::content::SITE;
use lespro_core::structured_data::offer_catalog_json_ld;
use sections::*;
use tracing::info;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let catalog = Arc::new(Catalog::lespro());
    let json_ld = offer_catalog_json_ld(&catalog, &SITE);
    info!(materials = catalog.len(), "mounting landing page");

    view! {
        <script type="application/ld+json" inner_html=json_ld></script>
        <Nav />
        <main>
            <Hero />
            <Advantages />
            <CatalogSection catalog=Arc::clone(&catalog) />
            <CalculatorSection catalog=catalog />
            <About />
            <Services />
            <Blog />
            <Contacts />
        </main>
        <Footer />
    }
}
