//! Badge artifacts: QR code, barcode and verification link.

use crate::domain::a001_employee::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_banner::{BannerKind, StatusBanner};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::a001_employee::aggregate::{BadgeArtifacts, Employee, EmployeeId};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

#[component]
fn ArtifactImage(
    title: &'static str,
    src: Option<String>,
    file_name: String,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let class = if wide {
        "artifact artifact--wide"
    } else {
        "artifact"
    };
    view! {
        <div class=class>
            <h4>{title}</h4>
            {match src {
                Some(src) => view! {
                    <img src=src.clone() alt=title />
                    <a class="button button--link" href=src download=file_name>
                        {icon("download")}
                        " Download"
                    </a>
                }
                .into_any(),
                None => view! { <div class="artifact__missing">"Not available"</div> }.into_any(),
            }}
        </div>
    }
}

/// Rendered outputs of a create/update, or of a stored record
#[component]
pub fn BadgeArtifactsPanel(artifacts: BadgeArtifacts) -> impl IntoView {
    let qr_name = artifacts.qr_file_name();
    let barcode_name = artifacts.barcode_file_name();
    let badge_href = format!(
        "/employees/{}",
        urlencoding::encode(artifacts.employee_id.as_str())
    );
    let photo = artifacts.photo_url.clone().filter(|u| !u.is_empty());

    view! {
        <div class="badge-artifacts">
            <div class="badge-artifacts__header">
                <span class="badge-artifacts__label">"Employee ID"</span>
                <a href=badge_href class="badge-artifacts__id">{artifacts.employee_id.to_string()}</a>
            </div>
            <div class="badge-artifacts__grid">
                <div class="artifact">
                    <h4>"Photo"</h4>
                    {match photo {
                        Some(url) => view! { <img class="photo-preview" src=url alt="Employee photo" /> }.into_any(),
                        None => view! { <div class="photo-preview photo-preview--empty">"No Photo"</div> }.into_any(),
                    }}
                </div>
                <ArtifactImage title="QR Code" src=artifacts.qr_data_url.clone() file_name=qr_name />
                <ArtifactImage
                    title="Barcode"
                    src=artifacts.barcode_data_url.clone()
                    file_name=barcode_name
                    wide=true
                />
            </div>
            {artifacts.verify_url.clone().map(|url| view! {
                <div class="badge-artifacts__verify">
                    <span>"Verify URL: "</span>
                    <a href=url.clone() target="_blank" rel="noopener noreferrer">{url.clone()}</a>
                </div>
            })}
        </div>
    }
}

fn employee_summary(employee: &Employee) -> Vec<(&'static str, String)> {
    [
        ("Position", employee.position.clone()),
        ("Department", employee.dept.clone()),
        ("Contact", employee.contact.clone()),
        ("Email", employee.email.clone()),
        ("Blood group", employee.blood_group.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (label, v)))
    .collect()
}

/// Stored record with its badge, at `/employees/:id`
#[component]
pub fn EmployeeBadgePage() -> impl IntoView {
    let params = use_params_map();
    let employee = RwSignal::new(None::<Employee>);
    let artifacts = RwSignal::new(None::<BadgeArtifacts>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    // only the newest request may write; older replies are dropped
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let Some(id) = params.read().get("id") else {
            return;
        };
        let id = EmployeeId::new(id);
        generation.update_value(|g| *g += 1);
        let issued = generation.get_value();
        loading.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_employee(&id).await;
            if generation.get_value() != issued {
                log::debug!("dropping stale badge load of {}", id);
                return;
            }
            match result {
                Ok(reply) => {
                    artifacts.set(BadgeArtifacts::from_details(&reply));
                    employee.set(reply.employee);
                }
                Err(e) => {
                    log::warn!("failed to load badge for {}: {}", id, e);
                    employee.set(None);
                    artifacts.set(None);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let title = Signal::derive(move || {
        employee.with(|e| {
            e.as_ref()
                .map(|e| e.full_name())
                .unwrap_or_else(|| "Employee Badge".to_string())
        })
    });
    let subtitle = Signal::derive(move || {
        employee.with(|e| e.as_ref().map(|e| format!("Created {}", format_datetime(&e.created_at))))
    });
    let edit_href = move || {
        params
            .read()
            .get("id")
            .map(|id| format!("/employees/{}/edit", urlencoding::encode(&id)))
            .unwrap_or_else(|| "/employees".to_string())
    };

    view! {
        <div class="page employee-badge">
            <PageHeader title=title subtitle=subtitle>
                <a href=edit_href class="button button--link">
                    {icon("edit")}
                    " Edit"
                </a>
                <a href="/employees" class="button button--link">"Back to list"</a>
            </PageHeader>

            <StatusBanner
                message=Signal::derive(move || error.get())
                kind=BannerKind::Error
                on_dismiss=Callback::new(move |_: ()| error.set(None))
            />

            <Show when=move || loading.get()>
                <Spinner />
            </Show>

            {move || employee.get().map(|e| {
                let rows = employee_summary(&e);
                view! {
                    <dl class="employee-summary">
                        {rows
                            .into_iter()
                            .map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            })
                            .collect_view()}
                    </dl>
                }
            })}

            {move || artifacts.get().map(|a| view! { <BadgeArtifactsPanel artifacts=a /> })}
        </div>
    }
}
