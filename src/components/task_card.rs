//! Task Card Component
//!
//! Presentational card body, shared by the column rows and the drag overlay.

use leptos::prelude::*;

#[component]
pub fn TaskCard(
    content: String,
    /// Extra classes (style tag, drag state)
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class) role="article">
            {content}
        </div>
    }
}
