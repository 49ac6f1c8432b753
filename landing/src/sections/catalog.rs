use std::sync::Arc;

use leptos::prelude::*;
use lespro_core::content::CATALOG_HEADER;
use lespro_core::format::price_per_unit;
use lespro_core::{Catalog, Section};

use crate::components::{Icon, SectionHeading};

#[component]
pub fn CatalogSection(catalog: Arc<Catalog>) -> impl IntoView {
    let cards = catalog
        .iter()
        .map(|material| {
            let name = material.name.clone();
            let price = format!("От {}", price_per_unit(material));
            view! {
                <article class="card product-card">
                    <div class="product-card-image">
                        <Icon name="box" size=64 class="text-secondary-muted" />
                    </div>
                    <div class="card-header">
                        <h3 class="card-title">{name}</h3>
                        <p class="card-description">{price}</p>
                    </div>
                    <div class="card-content">
                        <button type="button" class="btn btn-secondary btn-block">
                            <Icon name="info" size=16 class="mr-2" />
                            "Подробнее"
                        </button>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Catalog.id() class="catalog">
            <div class="container">
                <SectionHeading header=&CATALOG_HEADER />
                <div class="catalog-grid">{cards}</div>
            </div>
        </section>
    }
}
