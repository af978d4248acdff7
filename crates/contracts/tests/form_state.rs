//! Employee form reducer.

use contracts::domain::a001_employee::form_state::{
    update, EmployeeFormState, FormEffect, FormMode, FormMsg, LoadTicket, SubmitStatus,
};
use contracts::domain::a001_employee::{BadgeArtifacts, Employee, EmployeeId, FieldKey, PhotoAction, PhotoSelection};
use contracts::shared::api_error::ApiError;
use contracts::shared::config::FormField;

fn run(state: EmployeeFormState, msgs: Vec<FormMsg>) -> (EmployeeFormState, Vec<FormEffect>) {
    let mut state = state;
    let mut last = Vec::new();
    for msg in msgs {
        let (next, effects) = update(state, msg);
        state = next;
        last = effects;
    }
    (state, last)
}

fn named() -> Vec<FormMsg> {
    vec![
        FormMsg::FieldChanged(FieldKey::FirstName, "Asha".into()),
        FormMsg::FieldChanged(FieldKey::LastName, "Rao".into()),
    ]
}

fn jpeg() -> PhotoSelection {
    PhotoSelection {
        name: "asha.jpg".into(),
        mime_type: "image/jpeg".into(),
        size_bytes: 1024,
    }
}

fn artifacts(id: &str) -> BadgeArtifacts {
    BadgeArtifacts {
        employee_id: EmployeeId::new(id),
        photo_url: None,
        qr_data_url: Some("data:image/png;base64,qr".into()),
        barcode_data_url: Some("data:image/png;base64,bc".into()),
        verify_url: None,
    }
}

#[test]
fn missing_names_block_submit() {
    let (state, effects) = run(EmployeeFormState::new(false), vec![FormMsg::Submit]);
    assert!(effects.is_empty());
    assert_eq!(
        state.error.as_deref(),
        Some("First name and last name are required.")
    );
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn invalid_dob_blocks_submit() {
    let mut msgs = named();
    msgs.push(FormMsg::FieldChanged(FieldKey::Optional(FormField::Dob), "1-1-24".into()));
    msgs.push(FormMsg::Submit);
    let (state, effects) = run(EmployeeFormState::new(false), msgs);
    assert!(effects.is_empty());
    assert_eq!(
        state.error.as_deref(),
        Some("DOB must be in DD-MM-YYYY format and a valid date.")
    );
}

#[test]
fn server_mode_create_attaches_photo() {
    let mut msgs = named();
    msgs.push(FormMsg::FieldChanged(FieldKey::Optional(FormField::Dob), "5-3-1990".into()));
    msgs.push(FormMsg::PhotoSelected(jpeg()));
    msgs.push(FormMsg::Submit);
    let (state, effects) = run(EmployeeFormState::new(false), msgs);

    assert_eq!(state.status, SubmitStatus::Submitting);
    match effects.as_slice() {
        [FormEffect::Create {
            payload,
            attach_photo: true,
        }] => {
            assert_eq!(payload.dob, "1990-03-05");
            assert_eq!(payload.photo_url, None);
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn submit_while_submitting_is_ignored() {
    let mut msgs = named();
    msgs.push(FormMsg::Submit);
    let (state, _) = run(EmployeeFormState::new(false), msgs);
    let (state, effects) = update(state, FormMsg::Submit);
    assert!(effects.is_empty());
    assert_eq!(state.status, SubmitStatus::Submitting);
}

#[test]
fn direct_mode_uploads_then_creates_with_url() {
    let mut msgs = named();
    msgs.push(FormMsg::PhotoSelected(jpeg()));
    msgs.push(FormMsg::Submit);
    let (state, effects) = run(EmployeeFormState::new(true), msgs);
    assert_eq!(effects, vec![FormEffect::UploadPhoto]);
    assert_eq!(state.status, SubmitStatus::Uploading);

    let (state, effects) = update(
        state,
        FormMsg::PhotoUploaded(Ok("https://img.example/asha.jpg".into())),
    );
    assert_eq!(state.status, SubmitStatus::Submitting);
    match effects.as_slice() {
        [FormEffect::Create {
            payload,
            attach_photo: false,
        }] => assert_eq!(
            payload.photo_url.as_deref(),
            Some("https://img.example/asha.jpg")
        ),
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn failed_upload_returns_to_idle() {
    let mut msgs = named();
    msgs.push(FormMsg::PhotoSelected(jpeg()));
    msgs.push(FormMsg::Submit);
    msgs.push(FormMsg::PhotoUploaded(Err(ApiError::Network("offline".into()))));
    let (state, effects) = run(EmployeeFormState::new(true), msgs);
    assert!(effects.is_empty());
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.error.as_deref(), Some("Network error: offline"));
}

#[test]
fn rejected_photo_keeps_previous_selection() {
    let gif = PhotoSelection {
        name: "a.gif".into(),
        mime_type: "image/gif".into(),
        size_bytes: 10,
    };
    let (state, _) = run(
        EmployeeFormState::new(false),
        vec![FormMsg::PhotoSelected(jpeg()), FormMsg::PhotoSelected(gif)],
    );
    assert_eq!(state.photo, Some(jpeg()));
    assert_eq!(state.error.as_deref(), Some("Only JPG, PNG or WEBP allowed"));
}

#[test]
fn success_and_failure_of_save() {
    let mut msgs = named();
    msgs.push(FormMsg::Submit);
    msgs.push(FormMsg::Saved(Ok(artifacts("EMP-1"))));
    let (state, _) = run(EmployeeFormState::new(false), msgs);
    assert_eq!(state.result(), Some(&artifacts("EMP-1")));

    let mut msgs = named();
    msgs.push(FormMsg::Submit);
    msgs.push(FormMsg::Saved(Err(ApiError::Backend("Server error".into()))));
    let (state, _) = run(EmployeeFormState::new(false), msgs);
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.error.as_deref(), Some("Server error"));
    // user can retry by hand
    let (_, effects) = update(state, FormMsg::Submit);
    assert_eq!(effects.len(), 1);
}

fn loaded_edit_state() -> EmployeeFormState {
    let employee: Employee = serde_json::from_value(serde_json::json!({
        "employee_id": "EMP-3",
        "first_name": "Ravi",
        "last_name": "Kumar",
        "dob": "1988-12-01",
        "photo_url": "https://img.example/ravi.jpg",
        "created_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    let (state, effects) = update(
        EmployeeFormState::new(false),
        FormMsg::EditRequested(EmployeeId::new("EMP-3")),
    );
    let ticket = LoadTicket {
        generation: 1,
        employee_id: EmployeeId::new("EMP-3"),
    };
    assert_eq!(
        effects,
        vec![FormEffect::ReleasePhoto, FormEffect::Load(ticket.clone())]
    );
    let (state, _) = update(
        state,
        FormMsg::Loaded {
            ticket,
            result: Ok(employee),
        },
    );
    state
}

fn employee(id: &str, first_name: &str) -> Employee {
    serde_json::from_value(serde_json::json!({
        "employee_id": id,
        "first_name": first_name,
        "last_name": "Doe",
        "created_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap()
}

fn load_ticket(effects: &[FormEffect]) -> LoadTicket {
    effects
        .iter()
        .find_map(|e| match e {
            FormEffect::Load(ticket) => Some(ticket.clone()),
            _ => None,
        })
        .expect("load effect")
}

#[test]
fn superseded_record_load_is_dropped() {
    let (state, effects) = update(
        EmployeeFormState::new(false),
        FormMsg::EditRequested(EmployeeId::new("EMP-A")),
    );
    let first = load_ticket(&effects);
    let (state, effects) = update(state, FormMsg::EditRequested(EmployeeId::new("EMP-B")));
    let second = load_ticket(&effects);
    assert_ne!(first.generation, second.generation);

    // A's slow reply arrives after B was requested
    let (state, _) = update(
        state,
        FormMsg::Loaded {
            ticket: first,
            result: Ok(employee("EMP-A", "Alice")),
        },
    );
    assert_eq!(state.status, SubmitStatus::Loading);
    assert_eq!(state.fields.first_name, "");

    let (state, _) = update(
        state,
        FormMsg::Loaded {
            ticket: second,
            result: Ok(employee("EMP-B", "Bob")),
        },
    );
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.fields.first_name, "Bob");
    match &state.mode {
        FormMode::Edit { employee_id, .. } => assert_eq!(employee_id, &EmployeeId::new("EMP-B")),
        FormMode::Create => panic!("expected edit mode"),
    }

    let (_, effects) = update(state, FormMsg::Submit);
    match effects.as_slice() {
        [FormEffect::Update { employee_id, .. }] => assert_eq!(employee_id, &EmployeeId::new("EMP-B")),
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn load_after_reset_is_dropped() {
    let (state, effects) = update(
        EmployeeFormState::new(false),
        FormMsg::EditRequested(EmployeeId::new("EMP-A")),
    );
    let ticket = load_ticket(&effects);
    let (state, _) = update(state, FormMsg::Reset);
    let (state, _) = update(
        state,
        FormMsg::Loaded {
            ticket,
            result: Ok(employee("EMP-A", "Alice")),
        },
    );
    assert!(!state.is_edit());
    assert_eq!(state.fields.first_name, "");
}

#[test]
fn edit_loads_record_into_form() {
    let state = loaded_edit_state();
    assert_eq!(state.fields.dob, "01-12-1988");
    assert_eq!(
        state.mode,
        FormMode::Edit {
            employee_id: EmployeeId::new("EMP-3"),
            current_photo_url: Some("https://img.example/ravi.jpg".into()),
        }
    );
}

#[test]
fn edit_keep_and_delete_photo_actions() {
    let (_, effects) = update(loaded_edit_state(), FormMsg::Submit);
    match effects.as_slice() {
        [FormEffect::Update {
            employee_id,
            payload,
            attach_photo: false,
        }] => {
            assert_eq!(employee_id.as_str(), "EMP-3");
            assert_eq!(payload.photo_action, Some(PhotoAction::Keep));
            assert_eq!(payload.dob, "1988-12-01");
        }
        other => panic!("unexpected effects {other:?}"),
    }

    let (state, _) = update(loaded_edit_state(), FormMsg::PhotoActionChanged(PhotoAction::Delete));
    let (_, effects) = update(state, FormMsg::Submit);
    match effects.as_slice() {
        [FormEffect::Update { payload, .. }] => {
            assert_eq!(payload.photo_action, Some(PhotoAction::Delete));
            assert_eq!(payload.photo_url.as_deref(), Some("__clear__"));
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn edit_url_and_upload_need_input() {
    let (state, _) = update(loaded_edit_state(), FormMsg::PhotoActionChanged(PhotoAction::Url));
    let (state, effects) = update(state, FormMsg::Submit);
    assert!(effects.is_empty());
    assert_eq!(state.error.as_deref(), Some("Enter the URL of the new photo."));

    let (state, _) = update(state, FormMsg::PhotoUrlChanged("https://img.example/new.png".into()));
    let (_, effects) = update(state, FormMsg::Submit);
    match effects.as_slice() {
        [FormEffect::Update { payload, .. }] => {
            assert_eq!(payload.photo_action, Some(PhotoAction::Url));
            assert_eq!(payload.photo_url.as_deref(), Some("https://img.example/new.png"));
        }
        other => panic!("unexpected effects {other:?}"),
    }

    let (state, _) = update(loaded_edit_state(), FormMsg::PhotoActionChanged(PhotoAction::Upload));
    let (state, effects) = update(state, FormMsg::Submit);
    assert!(effects.is_empty());
    assert_eq!(state.error.as_deref(), Some("Choose a photo to upload."));

    let (state, _) = update(state, FormMsg::PhotoSelected(jpeg()));
    let (_, effects) = update(state, FormMsg::Submit);
    match effects.as_slice() {
        [FormEffect::Update {
            payload,
            attach_photo: true,
            ..
        }] => assert_eq!(payload.photo_action, Some(PhotoAction::Upload)),
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn photo_action_ignored_in_create_mode() {
    let (state, _) = update(
        EmployeeFormState::new(false),
        FormMsg::PhotoActionChanged(PhotoAction::Delete),
    );
    assert_eq!(state.photo_action, PhotoAction::Keep);
}

#[test]
fn reset_keeps_upload_mode() {
    let (state, effects) = run(EmployeeFormState::new(true), {
        let mut m = named();
        m.push(FormMsg::Reset);
        m
    });
    assert_eq!(effects, vec![FormEffect::ReleasePhoto]);
    assert!(state.direct_upload());
    assert_eq!(state.fields.first_name, "");
}
