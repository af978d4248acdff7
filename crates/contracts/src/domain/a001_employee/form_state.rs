//! Employee create/edit form as a pure state machine.
//!
//! The view dispatches [`FormMsg`]s; [`update`] returns the next state plus
//! the [`FormEffect`]s the view must run (HTTP calls). Results come back as
//! further messages. The selected photo file itself stays in the view; the
//! state only tracks its metadata.

use super::aggregate::{BadgeArtifacts, Employee, EmployeeFields, EmployeeId, EmployeePayload, FieldKey, ValidationError};
use super::photo::{PhotoAction, PhotoSelection};
use crate::shared::api_error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    Create,
    Edit {
        employee_id: EmployeeId,
        current_photo_url: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitStatus {
    Idle,
    Loading,
    /// Waiting for the direct-to-host photo upload.
    Uploading,
    Submitting,
    Done(BadgeArtifacts),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFormState {
    pub mode: FormMode,
    pub fields: EmployeeFields,
    pub photo: Option<PhotoSelection>,
    /// Edit mode only.
    pub photo_action: PhotoAction,
    pub photo_url_input: String,
    pub status: SubmitStatus,
    pub error: Option<String>,
    direct_upload: bool,
    /// Payload held while the photo upload is in flight.
    pending: Option<EmployeePayload>,
    /// Bumped on every record load; older replies are dropped.
    load_generation: u64,
}

impl EmployeeFormState {
    pub fn new(direct_upload: bool) -> Self {
        Self {
            mode: FormMode::Create,
            fields: EmployeeFields::default(),
            photo: None,
            photo_action: PhotoAction::Keep,
            photo_url_input: String::new(),
            status: SubmitStatus::Idle,
            error: None,
            direct_upload,
            pending: None,
            load_generation: 0,
        }
    }

    /// Fresh create-mode state that still remembers which loads were issued.
    fn cleared(&self) -> Self {
        Self {
            load_generation: self.load_generation,
            ..Self::new(self.direct_upload)
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.status,
            SubmitStatus::Loading | SubmitStatus::Uploading | SubmitStatus::Submitting
        )
    }

    pub fn direct_upload(&self) -> bool {
        self.direct_upload
    }

    pub fn result(&self) -> Option<&BadgeArtifacts> {
        match &self.status {
            SubmitStatus::Done(artifacts) => Some(artifacts),
            _ => None,
        }
    }

    fn employee_id(&self) -> Option<&EmployeeId> {
        match &self.mode {
            FormMode::Edit { employee_id, .. } => Some(employee_id),
            FormMode::Create => None,
        }
    }

    fn save_effect(&self, payload: EmployeePayload, attach_photo: bool) -> FormEffect {
        match self.employee_id() {
            Some(id) => FormEffect::Update {
                employee_id: id.clone(),
                payload,
                attach_photo,
            },
            None => FormEffect::Create {
                payload,
                attach_photo,
            },
        }
    }

    /// Decide how the photo travels and what runs first.
    fn plan_submit(&self, payload: EmployeePayload) -> Result<SubmitPlan, ValidationError> {
        let wants_upload = match self.mode {
            FormMode::Create => self.photo.is_some(),
            FormMode::Edit { .. } => match self.photo_action {
                PhotoAction::Keep => {
                    return Ok(SubmitPlan::Save(payload.with_photo_action(PhotoAction::Keep), false))
                }
                PhotoAction::Delete => {
                    return Ok(SubmitPlan::Save(
                        payload.with_photo_action(PhotoAction::Delete),
                        false,
                    ))
                }
                PhotoAction::Url => {
                    let url = self.photo_url_input.trim();
                    if url.is_empty() {
                        return Err(ValidationError::MissingPhotoUrl);
                    }
                    return Ok(SubmitPlan::Save(
                        payload.with_photo_action(PhotoAction::Url).with_photo_url(url),
                        false,
                    ));
                }
                PhotoAction::Upload => {
                    if self.photo.is_none() {
                        return Err(ValidationError::MissingPhotoFile);
                    }
                    true
                }
            },
        };

        if let Some(photo) = &self.photo {
            photo.validate()?;
        }

        if !wants_upload {
            return Ok(SubmitPlan::Save(payload, false));
        }
        if self.direct_upload {
            // the hosted URL is filled in once the upload returns
            let payload = if self.is_edit() {
                payload.with_photo_action(PhotoAction::Url)
            } else {
                payload
            };
            Ok(SubmitPlan::UploadFirst(payload))
        } else {
            let payload = if self.is_edit() {
                payload.with_photo_action(PhotoAction::Upload)
            } else {
                payload
            };
            Ok(SubmitPlan::Save(payload, true))
        }
    }
}

/// Identifies one record load so a reply for a superseded request can be told
/// apart from the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub employee_id: EmployeeId,
}

enum SubmitPlan {
    Save(EmployeePayload, bool),
    UploadFirst(EmployeePayload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    /// Open the form on an existing record.
    EditRequested(EmployeeId),
    Loaded {
        ticket: LoadTicket,
        result: Result<Employee, ApiError>,
    },
    FieldChanged(FieldKey, String),
    PhotoSelected(PhotoSelection),
    PhotoCleared,
    PhotoActionChanged(PhotoAction),
    PhotoUrlChanged(String),
    Submit,
    PhotoUploaded(Result<String, ApiError>),
    Saved(Result<BadgeArtifacts, ApiError>),
    DismissError,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Fetch the record, answer with `Loaded` carrying the same ticket.
    Load(LoadTicket),
    /// Upload the held file to the image host, answer with `PhotoUploaded`.
    UploadPhoto,
    Create {
        payload: EmployeePayload,
        attach_photo: bool,
    },
    Update {
        employee_id: EmployeeId,
        payload: EmployeePayload,
        attach_photo: bool,
    },
    /// The view should drop its held file (and preview).
    ReleasePhoto,
}

/// Pure update function: applies a message and returns the effects to run.
pub fn update(mut state: EmployeeFormState, msg: FormMsg) -> (EmployeeFormState, Vec<FormEffect>) {
    let effects = match msg {
        FormMsg::EditRequested(id) => {
            state = state.cleared();
            state.load_generation += 1;
            state.mode = FormMode::Edit {
                employee_id: id.clone(),
                current_photo_url: None,
            };
            state.status = SubmitStatus::Loading;
            let ticket = LoadTicket {
                generation: state.load_generation,
                employee_id: id,
            };
            vec![FormEffect::ReleasePhoto, FormEffect::Load(ticket)]
        }
        FormMsg::Loaded { ticket, result } => {
            if state.status != SubmitStatus::Loading || ticket.generation != state.load_generation {
                log::debug!(
                    "dropping stale load of {} (generation {}, current {})",
                    ticket.employee_id,
                    ticket.generation,
                    state.load_generation
                );
                return (state, Vec::new());
            }
            state.status = SubmitStatus::Idle;
            match result {
                Ok(employee) => {
                    state.fields = employee.to_fields();
                    // keep the requested id even if the backend echoes another
                    state.mode = FormMode::Edit {
                        employee_id: ticket.employee_id,
                        current_photo_url: employee.photo_url.clone().filter(|u| !u.is_empty()),
                    };
                }
                Err(e) => state.error = Some(e.to_string()),
            }
            Vec::new()
        }
        FormMsg::FieldChanged(key, value) => {
            state.fields.set(key, value);
            Vec::new()
        }
        FormMsg::PhotoSelected(photo) => match photo.validate() {
            Ok(()) => {
                state.photo = Some(photo);
                if state.is_edit() {
                    state.photo_action = PhotoAction::Upload;
                }
                Vec::new()
            }
            Err(e) => {
                // previous selection stays in place
                state.error = Some(e.to_string());
                Vec::new()
            }
        },
        FormMsg::PhotoCleared => {
            state.photo = None;
            if state.photo_action == PhotoAction::Upload {
                state.photo_action = PhotoAction::Keep;
            }
            vec![FormEffect::ReleasePhoto]
        }
        FormMsg::PhotoActionChanged(action) => {
            if state.is_edit() {
                state.photo_action = action;
            }
            Vec::new()
        }
        FormMsg::PhotoUrlChanged(url) => {
            state.photo_url_input = url;
            Vec::new()
        }
        FormMsg::Submit => {
            if state.is_busy() {
                return (state, Vec::new());
            }
            state.error = None;
            let plan = state
                .fields
                .to_payload()
                .and_then(|payload| state.plan_submit(payload));
            match plan {
                Err(e) => {
                    state.error = Some(e.to_string());
                    Vec::new()
                }
                Ok(SubmitPlan::Save(payload, attach_photo)) => {
                    state.status = SubmitStatus::Submitting;
                    vec![state.save_effect(payload, attach_photo)]
                }
                Ok(SubmitPlan::UploadFirst(payload)) => {
                    state.status = SubmitStatus::Uploading;
                    state.pending = Some(payload);
                    vec![FormEffect::UploadPhoto]
                }
            }
        }
        FormMsg::PhotoUploaded(result) => {
            if state.status != SubmitStatus::Uploading {
                return (state, Vec::new());
            }
            let Some(payload) = state.pending.take() else {
                state.status = SubmitStatus::Idle;
                return (state, Vec::new());
            };
            match result {
                Ok(url) => {
                    state.status = SubmitStatus::Submitting;
                    vec![state.save_effect(payload.with_photo_url(url), false)]
                }
                Err(e) => {
                    state.status = SubmitStatus::Idle;
                    state.error = Some(e.to_string());
                    Vec::new()
                }
            }
        }
        FormMsg::Saved(result) => {
            if state.status != SubmitStatus::Submitting {
                return (state, Vec::new());
            }
            match result {
                Ok(artifacts) => {
                    if let FormMode::Edit {
                        current_photo_url, ..
                    } = &mut state.mode
                    {
                        if artifacts.photo_url.is_some() || state.photo_action == PhotoAction::Delete {
                            *current_photo_url = artifacts.photo_url.clone();
                        }
                    }
                    state.photo_action = PhotoAction::Keep;
                    state.photo_url_input.clear();
                    state.status = SubmitStatus::Done(artifacts);
                }
                Err(e) => {
                    state.status = SubmitStatus::Idle;
                    state.error = Some(e.to_string());
                }
            }
            Vec::new()
        }
        FormMsg::DismissError => {
            state.error = None;
            Vec::new()
        }
        FormMsg::Reset => {
            state = state.cleared();
            vec![FormEffect::ReleasePhoto]
        }
    };

    (state, effects)
}
