use super::view_model::EmployeeFormViewModel;
use crate::domain::a001_employee::ui::artifacts::BadgeArtifactsPanel;
use crate::shared::components::status_banner::{BannerKind, StatusBanner};
use crate::shared::icons::icon;
use contracts::domain::a001_employee::aggregate::FieldKey;
use contracts::domain::a001_employee::form_state::{FormMode, FormMsg, SubmitStatus};
use contracts::domain::a001_employee::photo::{PhotoAction, ALLOWED_PHOTO_TYPES};
use contracts::shared::config::{AppConfig, FormField};
use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

#[component]
fn TextField(
    vm: EmployeeFormViewModel,
    field: FieldKey,
    placeholder: &'static str,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let value = vm.field(field);
    let class = if full_width {
        "form-group form-group--wide"
    } else {
        "form-group"
    };

    view! {
        <div class=class>
            <input
                type="text"
                name=field.key()
                placeholder=placeholder
                required=required
                prop:value=value
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
                disabled=move || vm.state.with(|s| s.is_busy())
            />
        </div>
    }
}

#[component]
fn PhotoPicker(vm: EmployeeFormViewModel) -> impl IntoView {
    let accept = ALLOWED_PHOTO_TYPES.join(",");
    let has_photo = move || vm.state.with(|s| s.photo.is_some());

    view! {
        <div class="photo-picker">
            <input
                type="file"
                accept=accept
                on:change=move |ev| {
                    let input: HtmlInputElement = event_target(&ev);
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        vm.select_file(file);
                    }
                    // allow picking the same file again after a rejection
                    input.set_value("");
                }
            />
            <Show when=has_photo>
                <div class="photo-picker__selected">
                    {move || vm.preview.get().map(|src| view! { <img class="photo-preview" src=src alt="Selected photo" /> })}
                    <span class="photo-picker__name">
                        {move || vm.state.with(|s| s.photo.as_ref().map(|p| p.name.clone()).unwrap_or_default())}
                    </span>
                    <button type="button" class="button button--link" on:click=move |_| vm.dispatch(FormMsg::PhotoCleared)>
                        {icon("x")}
                        " Remove"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Edit mode: current photo plus what to do with it.
#[component]
fn PhotoActions(vm: EmployeeFormViewModel) -> impl IntoView {
    let current = move || {
        vm.state.with(|s| match &s.mode {
            FormMode::Edit {
                current_photo_url, ..
            } => current_photo_url.clone(),
            FormMode::Create => None,
        })
    };
    let action = move || vm.state.with(|s| s.photo_action);

    view! {
        <div class="photo-actions">
            <div class="photo-actions__current">
                {move || match current() {
                    Some(url) => view! { <img class="photo-preview" src=url alt="Current photo" /> }.into_any(),
                    None => view! { <div class="photo-preview photo-preview--empty">"No Photo"</div> }.into_any(),
                }}
            </div>
            <div class="photo-actions__choices">
                {PhotoAction::ALL
                    .into_iter()
                    .map(|choice| view! {
                        <label class="photo-actions__choice">
                            <input
                                type="radio"
                                name="photo_action"
                                value=choice.as_str()
                                prop:checked=move || action() == choice
                                on:change=move |_| vm.dispatch(FormMsg::PhotoActionChanged(choice))
                            />
                            {choice.label()}
                        </label>
                    })
                    .collect_view()}
            </div>
            <Show when=move || action() == PhotoAction::Url>
                <input
                    type="url"
                    class="photo-actions__url"
                    placeholder="https://..."
                    prop:value=move || vm.state.with(|s| s.photo_url_input.clone())
                    on:input=move |ev| vm.dispatch(FormMsg::PhotoUrlChanged(event_target_value(&ev)))
                />
            </Show>
            <Show when=move || action() == PhotoAction::Upload>
                <PhotoPicker vm=vm />
            </Show>
        </div>
    }
}

/// Create/edit form with the badge result underneath
#[component]
pub fn EmployeeForm(vm: EmployeeFormViewModel, config: AppConfig) -> impl IntoView {
    let is_edit = move || vm.state.with(|s| s.is_edit());
    let busy = Signal::derive(move || vm.state.with(|s| s.is_busy()));
    let error = Signal::derive(move || vm.state.with(|s| s.error.clone()));

    let submit_label = move || {
        vm.state.with(|s| match s.status {
            SubmitStatus::Loading => "Loading...",
            SubmitStatus::Uploading => "Uploading photo...",
            SubmitStatus::Submitting if s.is_edit() => "Saving...",
            SubmitStatus::Submitting => "Creating...",
            _ if s.is_edit() => "Save Changes",
            _ => "Create Badge",
        })
    };

    let optional_fields = FormField::ALL
        .into_iter()
        .filter(|field| config.shows(*field))
        .map(|field| {
            view! {
                <TextField
                    vm=vm
                    field=FieldKey::Optional(field)
                    placeholder=field.placeholder()
                    full_width=field.full_width()
                />
            }
        })
        .collect_view();

    view! {
        <div class="employee-form">
            <StatusBanner
                message=error
                kind=BannerKind::Error
                on_dismiss=Callback::new(move |_: ()| vm.dispatch(FormMsg::DismissError))
            />

            <Show when=move || vm.state.with(|s| s.status == SubmitStatus::Loading)>
                <Spinner />
            </Show>

            <form
                class="employee-form__grid"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.dispatch(FormMsg::Submit);
                }
            >
                <TextField vm=vm field=FieldKey::FirstName placeholder="First name" required=true />
                <TextField vm=vm field=FieldKey::LastName placeholder="Last name" required=true />
                {optional_fields}

                <div class="form-group form-group--wide">
                    <Show when=is_edit fallback=move || view! { <PhotoPicker vm=vm /> }>
                        <PhotoActions vm=vm />
                    </Show>
                </div>

                <div class="form-group form-group--wide employee-form__actions">
                    <button type="submit" class="button button--primary" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                    <Show when=move || !is_edit()>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.dispatch(FormMsg::Reset)
                            disabled=busy
                        >
                            "Clear"
                        </Button>
                    </Show>
                </div>
            </form>

            {move || vm.state.with(|s| s.result().cloned()).map(|artifacts| view! {
                <BadgeArtifactsPanel artifacts=artifacts />
            })}
        </div>
    }
}
