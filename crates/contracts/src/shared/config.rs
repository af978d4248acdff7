use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use thiserror::Error;

/// Built-in configuration, used when the bundled file is missing or invalid.
pub const DEFAULT_CONFIG: &str = r#"
brand = "ARTIBOTS"
api_base = ""
page_size = 50
debounce_ms = 300
fields = ["position", "dept", "contact", "email", "dob", "blood_group", "address", "other"]

[upload]
mode = "server"
"#;

/// Where employee photos go on create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum UploadMode {
    /// File is sent to the backend inside the multipart body.
    Server,
    /// File is uploaded unsigned to the image host first; the backend only
    /// receives the hosted URL.
    Direct {
        cloud_name: String,
        upload_preset: String,
    },
}

impl UploadMode {
    pub fn is_direct(&self) -> bool {
        matches!(self, UploadMode::Direct { .. })
    }
}

/// Optional form fields. First and last name are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Position,
    Dept,
    Contact,
    Email,
    Dob,
    BloodGroup,
    Address,
    Other,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Position,
        FormField::Dept,
        FormField::Contact,
        FormField::Email,
        FormField::Dob,
        FormField::BloodGroup,
        FormField::Address,
        FormField::Other,
    ];

    /// Multipart / JSON key.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Position => "position",
            FormField::Dept => "dept",
            FormField::Contact => "contact",
            FormField::Email => "email",
            FormField::Dob => "dob",
            FormField::BloodGroup => "blood_group",
            FormField::Address => "address",
            FormField::Other => "other",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Position => "Position",
            FormField::Dept => "Department",
            FormField::Contact => "Contact",
            FormField::Email => "Email",
            FormField::Dob => "DOB (DD-MM-YYYY)",
            FormField::BloodGroup => "Blood group",
            FormField::Address => "Address",
            FormField::Other => "Other",
        }
    }

    /// Rendered across both grid columns.
    pub fn full_width(self) -> bool {
        matches!(self, FormField::Address | FormField::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page_size must be greater than zero")]
    ZeroPageSize,
    #[error("upload.{0} is required when upload.mode = \"direct\"")]
    MissingUploadSetting(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub brand: String,
    /// Empty means "same host as the page, port 4000".
    #[serde(default)]
    pub api_base: String,
    pub page_size: u32,
    pub debounce_ms: u32,
    pub fields: Vec<FormField>,
    pub upload: UploadMode,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if let UploadMode::Direct {
            cloud_name,
            upload_preset,
        } = &self.upload
        {
            if cloud_name.trim().is_empty() {
                return Err(ConfigError::MissingUploadSetting("cloud_name"));
            }
            if upload_preset.trim().is_empty() {
                return Err(ConfigError::MissingUploadSetting("upload_preset"));
            }
        }
        Ok(())
    }

    pub fn page_size(&self) -> NonZeroU32 {
        NonZeroU32::new(self.page_size).unwrap_or(crate::shared::pager::DEFAULT_PAGE_SIZE)
    }

    /// Whether the optional `field` is rendered in the form.
    pub fn shows(&self, field: FormField) -> bool {
        self.fields.contains(&field)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: "ARTIBOTS".to_string(),
            api_base: String::new(),
            page_size: 50,
            debounce_ms: 300,
            fields: FormField::ALL.to_vec(),
            upload: UploadMode::Server,
        }
    }
}

/// Parse and validate a TOML configuration document.
pub fn load_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
