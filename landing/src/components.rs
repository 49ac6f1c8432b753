//! Small building blocks shared by the page sections.

use leptos::prelude::*;
use lespro_core::content::SectionHeader;

/// Icon from the page's icon font, addressed by name (`"truck"`, `"phone"`).
///
/// ```rust,ignore
/// view! { <Icon name="calculator" size=24 /> }
/// ```
#[component]
pub fn Icon(
    /// Icon name, becomes the `icon-<name>` class
    name: &'static str,
    /// Size in pixels
    #[prop(default = 20)]
    size: u32,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span
            class=format!("icon icon-{name} {class}")
            style=format!("width: {size}px; height: {size}px;")
            aria-hidden="true"
        ></span>
    }
}

/// Centered `<h2>` + description used at the top of most sections.
#[component]
pub fn SectionHeading(header: &'static SectionHeader) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{header.title}</h2>
            <p class="section-description">{header.description}</p>
        </div>
    }
}
