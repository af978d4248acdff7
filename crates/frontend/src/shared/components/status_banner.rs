use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// Dismissible message strip. Renders nothing while `message` is `None`.
#[component]
pub fn StatusBanner(
    #[prop(into)] message: Signal<Option<String>>,
    kind: BannerKind,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    let class = match kind {
        BannerKind::Error => "status-banner status-banner--error",
        BannerKind::Success => "status-banner status-banner--success",
    };
    let mark = match kind {
        BannerKind::Error => "⚠",
        BannerKind::Success => "✓",
    };

    move || {
        message.get().map(|text| {
            view! {
                <div class=class role="status">
                    <span class="status-banner__icon">{mark}</span>
                    <span class="status-banner__text">{text}</span>
                    <button class="status-banner__close" title="Dismiss" on:click=move |_| on_dismiss.run(())>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
