use crate::domain::a001_employee::ui::artifacts::EmployeeBadgePage;
use crate::domain::a001_employee::ui::details::{EmployeeCreatePage, EmployeeEditPage};
use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=EmployeeCreatePage />
                    <Route path=path!("/employees") view=EmployeeList />
                    <Route path=path!("/employees/:id") view=EmployeeBadgePage />
                    <Route path=path!("/employees/:id/edit") view=EmployeeEditPage />
                </Routes>
            </Shell>
        </Router>
    }
}
