//! Employee create/edit UI
//!
//! MVVM split:
//! - model.rs: loading and request encoding helpers
//! - view_model.rs: reducer dispatch plus the browser-side effects
//! - view.rs: Leptos components (pure UI)

mod model;
mod view;
mod view_model;

pub use view::EmployeeForm;
pub use view_model::EmployeeFormViewModel;

use crate::shared::components::page_header::PageHeader;
use crate::shared::config::app_config;
use contracts::domain::a001_employee::aggregate::EmployeeId;
use contracts::domain::a001_employee::form_state::FormMsg;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

fn current_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(|| app_config().clone())
}

#[component]
pub fn EmployeeCreatePage() -> impl IntoView {
    let config = current_config();
    let vm = EmployeeFormViewModel::new(&config);

    view! {
        <div class="page employee-create">
            <PageHeader
                title="Add Employee".to_string()
                subtitle="Fill in the details to generate an ID badge".to_string()
            >
                <a href="/employees" class="button button--link">"Employee List"</a>
            </PageHeader>
            <EmployeeForm vm=vm config=config />
        </div>
    }
}

#[component]
pub fn EmployeeEditPage() -> impl IntoView {
    let config = current_config();
    let vm = EmployeeFormViewModel::new(&config);
    let params = use_params_map();

    Effect::new(move |_| {
        if let Some(id) = params.read().get("id") {
            vm.dispatch(FormMsg::EditRequested(EmployeeId::new(id)));
        }
    });

    let subtitle = Signal::derive(move || params.read().get("id"));

    view! {
        <div class="page employee-edit">
            <PageHeader title="Edit Employee".to_string() subtitle=subtitle>
                <a href="/employees" class="button button--link">"Back to list"</a>
            </PageHeader>
            <EmployeeForm vm=vm config=config />
        </div>
    }
}
