use crate::shared::icons::icon;
use leptos::prelude::*;

/// Prev / Next controls for offset pagination without a known total.
#[component]
pub fn PaginationControls(
    #[prop(into)] can_prev: Signal<bool>,
    #[prop(into)] can_next: Signal<bool>,
    /// Items on the current page
    #[prop(into)]
    shown: Signal<usize>,
    /// Zero-based offset of the first item
    #[prop(into)]
    offset: Signal<u32>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    let summary = move || {
        let n = shown.get();
        if n == 0 {
            "No items".to_string()
        } else {
            let first = offset.get() as usize + 1;
            format!("Showing {} items ({}–{})", n, first, first + n - 1)
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || !can_prev.get()
                title="Previous page"
            >
                {icon("chevron-left")}
                "Prev"
            </button>
            <span class="pagination-info">{summary}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !can_next.get()
                title="Next page"
            >
                "Next"
                {icon("chevron-right")}
            </button>
        </div>
    }
}
