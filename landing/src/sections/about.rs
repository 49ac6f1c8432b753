use leptos::prelude::*;
use lespro_core::Section;
use lespro_core::content::ABOUT;

use crate::components::Icon;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="about">
            <div class="container">
                <div class="about-grid">
                    <div class="about-content">
                        <h2 class="section-title">{ABOUT.title}</h2>
                        <p class="about-lead">{ABOUT.lead}</p>
                        <ul class="about-points">
                            {ABOUT
                                .points
                                .iter()
                                .map(|point| {
                                    view! {
                                        <li class="about-point">
                                            <Icon name="check" class="text-secondary" />
                                            <span>{*point}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="about-image">
                        <img src=ABOUT.image.src alt=ABOUT.image.alt />
                    </div>
                </div>
            </div>
        </section>
    }
}
