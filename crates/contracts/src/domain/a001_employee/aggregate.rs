use crate::shared::api_error::BackendReply;
use crate::shared::config::FormField;
use crate::shared::date_normalizer::{self, InvalidDate};
use super::photo::{PhotoAction, PhotoError, PHOTO_CLEAR_SENTINEL};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier assigned by the backend (e.g. "EMP-2024-0001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Employee record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub dept: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Canonical `YYYY-MM-DD` or empty.
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub other: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Backend timestamp, shown as-is when it is not RFC 3339.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub verify_url: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn has_photo(&self) -> bool {
        self.photo_url
            .as_deref()
            .is_some_and(|u| !u.trim().is_empty())
    }

    /// Form values for editing this record. The stored canonical DOB is
    /// turned back into the `DD-MM-YYYY` shape the form expects.
    pub fn to_fields(&self) -> EmployeeFields {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let dob = match self.dob.as_deref() {
            Some(raw) if !raw.trim().is_empty() => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|d| d.format("%d-%m-%Y").to_string())
                .unwrap_or_else(|_| raw.to_string()),
            _ => String::new(),
        };
        EmployeeFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            position: text(&self.position),
            dept: text(&self.dept),
            contact: text(&self.contact),
            email: text(&self.email),
            dob,
            blood_group: text(&self.blood_group),
            address: text(&self.address),
            other: text(&self.other),
        }
    }
}

// ============================================================================
// Form fields
// ============================================================================

/// Field addressed by a form edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    FirstName,
    LastName,
    Optional(FormField),
}

impl FieldKey {
    pub fn key(self) -> &'static str {
        match self {
            FieldKey::FirstName => "first_name",
            FieldKey::LastName => "last_name",
            FieldKey::Optional(f) => f.key(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("First name and last name are required.")]
    MissingName,
    #[error(transparent)]
    Date(#[from] InvalidDate),
    #[error(transparent)]
    Photo(#[from] PhotoError),
    #[error("Choose a photo to upload.")]
    MissingPhotoFile,
    #[error("Enter the URL of the new photo.")]
    MissingPhotoUrl,
}

/// Raw values typed into the employee form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub dept: String,
    pub contact: String,
    pub email: String,
    /// As typed, `DD-MM-YYYY`.
    pub dob: String,
    pub blood_group: String,
    pub address: String,
    pub other: String,
}

impl EmployeeFields {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::FirstName => &self.first_name,
            FieldKey::LastName => &self.last_name,
            FieldKey::Optional(f) => match f {
                FormField::Position => &self.position,
                FormField::Dept => &self.dept,
                FormField::Contact => &self.contact,
                FormField::Email => &self.email,
                FormField::Dob => &self.dob,
                FormField::BloodGroup => &self.blood_group,
                FormField::Address => &self.address,
                FormField::Other => &self.other,
            },
        }
    }

    pub fn set(&mut self, key: FieldKey, value: String) {
        let slot = match key {
            FieldKey::FirstName => &mut self.first_name,
            FieldKey::LastName => &mut self.last_name,
            FieldKey::Optional(f) => match f {
                FormField::Position => &mut self.position,
                FormField::Dept => &mut self.dept,
                FormField::Contact => &mut self.contact,
                FormField::Email => &mut self.email,
                FormField::Dob => &mut self.dob,
                FormField::BloodGroup => &mut self.blood_group,
                FormField::Address => &mut self.address,
                FormField::Other => &mut self.other,
            },
        };
        *slot = value;
    }

    /// Validate and build the wire payload. DOB is normalized; an empty DOB
    /// is sent as an empty string.
    pub fn to_payload(&self) -> Result<EmployeePayload, ValidationError> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        let dob = date_normalizer::normalize(&self.dob)?
            .map(|d| d.into_string())
            .unwrap_or_default();

        Ok(EmployeePayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            position: self.position.clone(),
            dept: self.dept.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
            dob,
            blood_group: self.blood_group.clone(),
            address: self.address.clone(),
            other: self.other.clone(),
            photo_url: None,
            photo_action: None,
        })
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /api/employees` and `PUT /api/employees/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub dept: String,
    pub contact: String,
    pub email: String,
    pub dob: String,
    pub blood_group: String,
    pub address: String,
    pub other: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_action: Option<PhotoAction>,
}

impl EmployeePayload {
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    pub fn with_photo_action(mut self, action: PhotoAction) -> Self {
        if action == PhotoAction::Delete {
            self.photo_url = Some(PHOTO_CLEAR_SENTINEL.to_string());
        }
        self.photo_action = Some(action);
        self
    }

    /// Ordered text entries for a multipart body. The photo file, if any,
    /// is appended separately under the `photo` key.
    pub fn form_entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("first_name", self.first_name.clone()),
            ("last_name", self.last_name.clone()),
        ];
        for field in FormField::ALL {
            let value = match field {
                FormField::Position => &self.position,
                FormField::Dept => &self.dept,
                FormField::Contact => &self.contact,
                FormField::Email => &self.email,
                FormField::Dob => &self.dob,
                FormField::BloodGroup => &self.blood_group,
                FormField::Address => &self.address,
                FormField::Other => &self.other,
            };
            entries.push((field.key(), value.clone()));
        }
        if let Some(url) = &self.photo_url {
            entries.push(("photo_url", url.clone()));
        }
        if let Some(action) = self.photo_action {
            entries.push(("photo_action", action.as_str().to_string()));
        }
        entries
    }
}

// ============================================================================
// Responses
// ============================================================================

/// `GET /api/employees?q=&limit=&offset=`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    pub success: bool,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply of create / update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveEmployeeResponse {
    pub success: bool,
    #[serde(default, rename = "employee_id")]
    pub employee_id: Option<EmployeeId>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub qr_data_url: Option<String>,
    #[serde(default)]
    pub barcode_data_url: Option<String>,
    #[serde(default)]
    pub verify_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/employees/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetailsResponse {
    pub success: bool,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub qr_data_url: Option<String>,
    #[serde(default)]
    pub barcode_data_url: Option<String>,
    #[serde(default)]
    pub verify_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `DELETE /api/employees/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

macro_rules! impl_backend_reply {
    ($($ty:ty),*) => {
        $(impl BackendReply for $ty {
            fn success(&self) -> bool {
                self.success
            }
            fn error_message(&self) -> Option<&str> {
                self.error.as_deref()
            }
        })*
    };
}

impl_backend_reply!(
    ListEmployeesResponse,
    SaveEmployeeResponse,
    EmployeeDetailsResponse,
    StatusResponse
);

// ============================================================================
// Badge artifacts
// ============================================================================

/// Rendered badge outputs for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeArtifacts {
    pub employee_id: EmployeeId,
    pub photo_url: Option<String>,
    pub qr_data_url: Option<String>,
    pub barcode_data_url: Option<String>,
    pub verify_url: Option<String>,
}

impl BadgeArtifacts {
    pub fn qr_file_name(&self) -> String {
        format!("{}-qr.png", self.employee_id)
    }

    pub fn barcode_file_name(&self) -> String {
        format!("{}-barcode.png", self.employee_id)
    }

    /// `fallback_id` covers updates, where some backends omit the id.
    pub fn from_save(reply: SaveEmployeeResponse, fallback_id: Option<&EmployeeId>) -> Option<Self> {
        let employee_id = reply.employee_id.or_else(|| fallback_id.cloned())?;
        Some(Self {
            employee_id,
            photo_url: reply.photo_url,
            qr_data_url: reply.qr_data_url,
            barcode_data_url: reply.barcode_data_url,
            verify_url: reply.verify_url,
        })
    }

    pub fn from_details(reply: &EmployeeDetailsResponse) -> Option<Self> {
        let employee = reply.employee.as_ref()?;
        Some(Self {
            employee_id: employee.employee_id.clone(),
            photo_url: employee.photo_url.clone(),
            qr_data_url: reply.qr_data_url.clone(),
            barcode_data_url: reply.barcode_data_url.clone(),
            verify_url: reply
                .verify_url
                .clone()
                .or_else(|| employee.verify_url.clone()),
        })
    }
}
