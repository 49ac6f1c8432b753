use leptos::prelude::*;
use lespro_core::Section;
use lespro_core::content::{BLOG_HEADER, POSTS};

use crate::components::{Icon, SectionHeading};

#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <section id=Section::Blog.id() class="blog">
            <div class="container">
                <SectionHeading header=&BLOG_HEADER />
                <div class="blog-grid">
                    {POSTS
                        .iter()
                        .map(|post| {
                            view! {
                                <article class="card blog-card">
                                    <div class="blog-card-image">
                                        <Icon name="file-text" size=64 class="text-primary-muted" />
                                    </div>
                                    <div class="card-header">
                                        <span class="badge blog-tag">{post.category}</span>
                                        <h3 class="blog-title">{post.title}</h3>
                                        <p class="blog-meta">
                                            <Icon name="calendar" size=14 />
                                            {post.date}
                                        </p>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
