/// List helpers: search box and match highlighting.
use leptos::prelude::*;

/// Shortest query worth highlighting.
const MIN_HIGHLIGHT_LEN: usize = 2;

/// Highlight case-insensitive matches of `filter` in `text`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.chars().count() < MIN_HIGHLIGHT_LEN {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of non-overlapping ASCII-case-insensitive matches.
///
/// Lowercasing can change byte lengths for non-ASCII text, so matching is
/// done on ASCII case only and ranges always fall on char boundaries of
/// `text`.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let hay = text.to_ascii_lowercase();
    let needle = filter.to_ascii_lowercase();
    let mut ranges = Vec::new();
    if needle.is_empty() {
        return ranges;
    }
    let mut from = 0;
    while let Some(pos) = hay[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Search box. Every keystroke goes to `on_input`; Enter or the button goes
/// to `on_submit`. Debouncing is the caller's business.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search name, email, contact or ID".to_string()
    } else {
        placeholder
    };

    let clear = move |_| {
        on_input.run(String::new());
        on_submit.run(());
    };

    view! {
        <form
            class="search-input"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="search-input__field">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <Show when=move || !value.get().is_empty()>
                    <button type="button" class="search-input__clear" on:click=clear title="Clear">
                        {crate::shared::icons::icon("x")}
                    </button>
                </Show>
            </div>
            <button type="submit" class="button button--primary">
                {crate::shared::icons::icon("search")}
                "Search"
            </button>
        </form>
    }
}
