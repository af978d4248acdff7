use crate::routes::routes::AppRoutes;
use crate::shared::config::app_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the parsed configuration to the whole app via context.
    provide_context(app_config().clone());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
