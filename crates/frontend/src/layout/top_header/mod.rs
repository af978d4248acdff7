//! TopHeader component - brand and links to the two pages.

use crate::shared::icons::icon;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let brand = use_context::<AppConfig>()
        .map(|c| c.brand)
        .unwrap_or_default();

    view! {
        <nav class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{brand}</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__link">
                    <A href="/">
                        {icon("user-plus")}
                        "Add Employee"
                    </A>
                </span>
                <span class="top-header__link">
                    <A href="/employees">
                        {icon("list")}
                        "Employee List"
                    </A>
                </span>
            </div>
        </nav>
    }
}
