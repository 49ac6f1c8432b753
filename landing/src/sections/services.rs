use leptos::prelude::*;
use lespro_core::Section;
use lespro_core::content::{SERVICES, SERVICES_HEADER};

use crate::components::{Icon, SectionHeading};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=Section::Services.id() class="services">
            <div class="container">
                <SectionHeading header=&SERVICES_HEADER />
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <article class="card service-card">
                                    <div class="icon-circle icon-circle-lg">
                                        <Icon name=service.icon size=32 class="text-secondary" />
                                    </div>
                                    <h3 class="card-title">{service.title}</h3>
                                    <p class="card-description">{service.text}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
