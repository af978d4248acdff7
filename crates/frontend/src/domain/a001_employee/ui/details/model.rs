use crate::domain::a001_employee::api::{self, BodyEncoding};
use contracts::domain::a001_employee::aggregate::{Employee, EmployeeId};
use contracts::shared::api_error::ApiError;
use contracts::shared::config::UploadMode;

/// Server mode sends the file with the record, so the body is always
/// multipart. Direct mode only ever sends a URL and uses JSON.
pub fn body_encoding(mode: &UploadMode) -> BodyEncoding {
    if mode.is_direct() {
        BodyEncoding::Json
    } else {
        BodyEncoding::Multipart
    }
}

/// Fetch the record the edit form is opened on
pub async fn load_employee(id: &EmployeeId) -> Result<Employee, ApiError> {
    let reply = api::fetch_employee(id).await?;
    reply
        .employee
        .ok_or_else(|| ApiError::Backend("Employee not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_follows_upload_mode() {
        assert_eq!(body_encoding(&UploadMode::Server), BodyEncoding::Multipart);
        let direct = UploadMode::Direct {
            cloud_name: "demo".into(),
            upload_preset: "badges".into(),
        };
        assert_eq!(body_encoding(&direct), BodyEncoding::Json);
    }
}
