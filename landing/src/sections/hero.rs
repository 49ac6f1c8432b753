use leptos::prelude::*;
use lespro_core::Section;
use lespro_core::content::{HERO, SITE};

use crate::components::Icon;
use crate::dom::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <span class="badge hero-badge">{SITE.since_badge()}</span>
                        <h1 class="hero-title">{HERO.title}</h1>
                        <p class="hero-description">{HERO.description}</p>
                        <div class="hero-actions">
                            <button
                                type="button"
                                class="btn btn-lg btn-secondary"
                                on:click=move |_| scroll_to_section(Section::Catalog.id())
                            >
                                <Icon name="shopping-cart" class="mr-2" />
                                {HERO.catalog_cta}
                            </button>
                            <button
                                type="button"
                                class="btn btn-lg btn-outline"
                                on:click=move |_| scroll_to_section(Section::Calculator.id())
                            >
                                <Icon name="calculator" class="mr-2" />
                                {HERO.calculator_cta}
                            </button>
                        </div>
                    </div>
                    <div class="hero-image">
                        <img src=HERO.image.src alt=HERO.image.alt />
                    </div>
                </div>
            </div>
        </section>
    }
}
