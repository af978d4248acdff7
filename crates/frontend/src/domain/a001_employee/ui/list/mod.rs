//! Employee list: search, paging, per-card delete.

pub mod state;

use crate::shared::components::page_header::PageHeader;
use crate::shared::config::app_config;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_banner::{BannerKind, StatusBanner};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_employee::aggregate::Employee;
use contracts::domain::a001_employee::list_state::ListMsg;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use leptos_router::components::A;
use state::{create_state, EmployeeListController};
use thaw::*;

#[component]
pub fn EmployeeList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(|| app_config().clone());
    let ctl = create_state(&config);

    Effect::new(move |_| ctl.dispatch(ListMsg::Mounted));

    let state = ctl.state;
    let search_text = Signal::derive(move || state.with(|s| s.search_text.clone()));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));

    view! {
        <div class="page employee-list">
            <PageHeader title="Employees".to_string()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctl.dispatch(ListMsg::Refresh)
                    disabled=Signal::derive(move || state.with(|s| s.is_loading()))
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <a href="/" class="button button--primary">
                    {icon("plus")}
                    " Add Employee"
                </a>
            </PageHeader>

            <SearchInput
                value=search_text
                on_input=Callback::new(move |text: String| ctl.dispatch(ListMsg::SearchInputChanged(text)))
                on_submit=Callback::new(move |_: ()| ctl.dispatch(ListMsg::SearchSubmitted))
            />

            <StatusBanner
                message=error
                kind=BannerKind::Error
                on_dismiss=Callback::new(move |_: ()| ctl.dispatch(ListMsg::DismissNotice))
            />
            <StatusBanner
                message=notice
                kind=BannerKind::Success
                on_dismiss=Callback::new(move |_: ()| ctl.dispatch(ListMsg::DismissNotice))
            />

            <Show when=move || state.with(|s| s.is_loading())>
                <div class="employee-list__loading">
                    <Spinner />
                </div>
            </Show>

            <Show
                when=move || state.with(|s| !s.employees.is_empty())
                fallback=move || {
                    view! {
                        <Show when=move || state.with(|s| !s.is_loading())>
                            <div class="employee-list__empty">"No employees found"</div>
                        </Show>
                    }
                }
            >
                <div class="employee-grid">
                    <For
                        each=move || state.with(|s| s.employees.clone())
                        key=|e| e.employee_id.clone()
                        children=move |employee| view! { <EmployeeCard employee=employee ctl=ctl /> }
                    />
                </div>
            </Show>

            <PaginationControls
                can_prev=Signal::derive(move || state.with(|s| s.can_go_prev()))
                can_next=Signal::derive(move || state.with(|s| s.can_go_next()))
                shown=Signal::derive(move || state.with(|s| s.employees.len()))
                offset=Signal::derive(move || state.with(|s| s.pager.cursor().offset))
                on_prev=Callback::new(move |_: ()| ctl.dispatch(ListMsg::PrevPage))
                on_next=Callback::new(move |_: ()| ctl.dispatch(ListMsg::NextPage))
            />
        </div>
    }
}

#[component]
fn EmployeeCard(employee: Employee, ctl: EmployeeListController) -> impl IntoView {
    let state = ctl.state;
    let id = employee.employee_id.clone();
    let name = employee.full_name();
    let query = move || state.with(|s| s.pager.cursor().query.clone());

    let badge_href = format!("/employees/{}", urlencoding::encode(id.as_str()));
    let edit_href = format!("{}/edit", badge_href);
    let json_href = crate::shared::api_utils::employee_url(id.as_str());
    let created = format_datetime(&employee.created_at);

    let photo = employee.photo_url.clone().filter(|u| !u.is_empty());
    let position = employee
        .position
        .clone()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| "-".to_string());
    let verify = employee.verify_url.clone().filter(|u| !u.is_empty());

    let deleting = {
        let id = id.clone();
        Signal::derive(move || state.with(|s| s.is_deleting(&id)))
    };

    let on_delete = {
        let id = id.clone();
        let name = name.clone();
        move |_| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete {} ({})?", name, id))
                        .ok()
                })
                .unwrap_or(false);
            if confirmed {
                ctl.dispatch(ListMsg::DeleteRequested(id.clone()));
            }
        }
    };

    view! {
        <div class="employee-card">
            <div class="employee-card__photo">
                {match photo {
                    Some(url) => view! { <img src=url alt=name.clone() /> }.into_any(),
                    None => view! { <div class="employee-card__no-photo">"No Photo"</div> }.into_any(),
                }}
            </div>
            <div class="employee-card__body">
                <div class="employee-card__name">
                    {
                        let name = name.clone();
                        move || highlight_matches(&name, &query())
                    }
                </div>
                <div class="employee-card__position">{position}</div>
                <div class="employee-card__id">
                    {
                        let id = id.clone();
                        move || highlight_matches(id.as_str(), &query())
                    }
                </div>
                <div class="employee-card__created">{created}</div>
            </div>
            <div class="employee-card__actions">
                {verify.map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer">"Open Verify"</a>
                })}
                <A href=badge_href>"Badge"</A>
                <A href=edit_href>
                    {icon("edit")}
                    " Edit"
                </A>
                <a href=json_href target="_blank" rel="noopener noreferrer">"View JSON"</a>
                <button
                    class="button button--danger"
                    on:click=on_delete
                    disabled=move || deleting.get()
                >
                    {icon("delete")}
                    {move || if deleting.get() { " Deleting..." } else { " Delete" }}
                </button>
            </div>
        </div>
    }
}
