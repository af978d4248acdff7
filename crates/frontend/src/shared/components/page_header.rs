use leptos::prelude::*;

/// Page title row with an action slot on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,

    /// Shown under the title, e.g. the record id being edited
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h2 class="page-header__title">{move || title.get()}</h2>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
