// In-page navigation helpers

use tracing::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scroll the element with `id` into view. Does nothing when the
/// page has no such element.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        debug!(id, "no section to scroll to");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
