use leptos::prelude::*;
use lespro_core::content::ADVANTAGES;

use crate::components::Icon;

#[component]
pub fn Advantages() -> impl IntoView {
    view! {
        <section class="advantages">
            <div class="container">
                <div class="advantages-grid">
                    {ADVANTAGES
                        .iter()
                        .map(|item| {
                            view! {
                                <article class="card advantage-card">
                                    <div class="icon-circle">
                                        <Icon name=item.icon size=24 class="text-secondary" />
                                    </div>
                                    <h3 class="card-title">{item.title}</h3>
                                    <p class="card-description">{item.text}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
