use super::model;
use crate::domain::a001_employee::api;
use crate::shared::upload::upload_photo;
use contracts::domain::a001_employee::aggregate::FieldKey;
use contracts::domain::a001_employee::form_state::{update, EmployeeFormState, FormEffect, FormMsg};
use contracts::domain::a001_employee::photo::PhotoSelection;
use contracts::shared::api_error::ApiError;
use contracts::shared::config::{AppConfig, UploadMode};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, Url};

/// ViewModel for the employee create/edit form
///
/// Form logic lives in the contracts reducer; this type owns the browser
/// side of it: the picked `File`, its preview URL and the HTTP effects.
#[derive(Clone, Copy)]
pub struct EmployeeFormViewModel {
    pub state: RwSignal<EmployeeFormState>,
    /// Object URL of the picked file
    pub preview: RwSignal<Option<String>>,
    file: StoredValue<Option<File>, LocalStorage>,
    upload: StoredValue<UploadMode>,
}

impl EmployeeFormViewModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: RwSignal::new(EmployeeFormState::new(config.upload.is_direct())),
            preview: RwSignal::new(None),
            file: StoredValue::new_local(None),
            upload: StoredValue::new(config.upload.clone()),
        }
    }

    pub fn field(&self, key: FieldKey) -> impl Fn() -> String + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.fields.get(key).to_string())
    }

    pub fn set_field(self, key: FieldKey, value: String) {
        self.dispatch(FormMsg::FieldChanged(key, value));
    }

    /// Handle a file picked in the photo input.
    ///
    /// The file is only held when the reducer accepted its metadata; a
    /// rejected pick leaves the previous file and preview in place.
    pub fn select_file(self, file: File) {
        let selection = PhotoSelection {
            name: file.name(),
            mime_type: file.type_(),
            size_bytes: file.size() as u64,
        };
        self.dispatch(FormMsg::PhotoSelected(selection.clone()));

        let accepted = self
            .state
            .with_untracked(|s| s.photo.as_ref() == Some(&selection));
        if !accepted {
            return;
        }
        self.release_preview();
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => self.preview.set(Some(url)),
            Err(e) => log::warn!("could not preview {}: {:?}", selection.name, e),
        }
        self.file.set_value(Some(file));
    }

    pub fn dispatch(self, msg: FormMsg) {
        let current = self.state.get_untracked();
        let (next, effects) = update(current, msg);
        self.state.set(next);
        for effect in effects {
            self.run(effect);
        }
    }

    fn release_preview(self) {
        if let Some(url) = self.preview.get_untracked() {
            let _ = Url::revoke_object_url(&url);
            self.preview.set(None);
        }
    }

    fn held_file(self, attach: bool) -> Option<File> {
        if attach {
            self.file.get_value()
        } else {
            None
        }
    }

    fn run(self, effect: FormEffect) {
        match effect {
            FormEffect::Load(ticket) => spawn_local(async move {
                let result = model::load_employee(&ticket.employee_id).await;
                if let Err(e) = &result {
                    log::warn!("failed to load employee {}: {}", ticket.employee_id, e);
                }
                self.dispatch(FormMsg::Loaded { ticket, result });
            }),
            FormEffect::UploadPhoto => {
                let file = self.file.get_value();
                let mode = self.upload.get_value();
                spawn_local(async move {
                    let result = match (mode, file) {
                        (
                            UploadMode::Direct {
                                cloud_name,
                                upload_preset,
                            },
                            Some(file),
                        ) => upload_photo(&cloud_name, &upload_preset, &file).await,
                        (UploadMode::Direct { .. }, None) => {
                            Err(ApiError::Network("No photo selected".to_string()))
                        }
                        (UploadMode::Server, _) => Err(ApiError::Network(
                            "Direct upload is not configured".to_string(),
                        )),
                    };
                    self.dispatch(FormMsg::PhotoUploaded(result));
                })
            }
            FormEffect::Create {
                payload,
                attach_photo,
            } => {
                let file = self.held_file(attach_photo);
                let encoding = self.upload.with_value(model::body_encoding);
                spawn_local(async move {
                    let result = api::create_employee(&payload, file.as_ref(), encoding).await;
                    match &result {
                        Ok(artifacts) => log::info!("created employee {}", artifacts.employee_id),
                        Err(e) => log::warn!("create failed: {}", e),
                    }
                    self.dispatch(FormMsg::Saved(result));
                })
            }
            FormEffect::Update {
                employee_id,
                payload,
                attach_photo,
            } => {
                let file = self.held_file(attach_photo);
                let encoding = self.upload.with_value(model::body_encoding);
                spawn_local(async move {
                    let result =
                        api::update_employee(&employee_id, &payload, file.as_ref(), encoding).await;
                    match &result {
                        Ok(_) => log::info!("updated employee {}", employee_id),
                        Err(e) => log::warn!("update of {} failed: {}", employee_id, e),
                    }
                    self.dispatch(FormMsg::Saved(result));
                })
            }
            FormEffect::ReleasePhoto => {
                self.file.set_value(None);
                self.release_preview();
            }
        }
    }
}
