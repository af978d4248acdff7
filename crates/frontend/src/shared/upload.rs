//! Unsigned direct upload of photos to the image host.
//!
//! Used when `upload.mode = "direct"`: the browser sends the file straight to
//! the host and the backend only ever sees the resulting URL.

use contracts::shared::api_error::ApiError;
use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{File, FormData};

const HOST_UPLOAD_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Deserialize)]
struct HostedImage {
    secure_url: Option<String>,
    error: Option<HostError>,
}

#[derive(Debug, Deserialize)]
struct HostError {
    message: String,
}

fn upload_endpoint(cloud_name: &str) -> String {
    format!(
        "{}/{}/image/upload",
        HOST_UPLOAD_BASE,
        urlencoding::encode(cloud_name)
    )
}

/// Upload `file` and return its hosted URL.
pub async fn upload_photo(cloud_name: &str, upload_preset: &str, file: &File) -> Result<String, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_str("upload_preset", upload_preset)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    log::debug!("uploading {} ({} bytes) to image host", file.name(), file.size());

    let response = Request::post(&upload_endpoint(cloud_name))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let hosted: HostedImage = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    match hosted {
        HostedImage {
            secure_url: Some(url),
            ..
        } if !url.is_empty() => Ok(url),
        HostedImage {
            error: Some(err), ..
        } => Err(ApiError::Backend(format!("Photo upload failed: {}", err.message))),
        _ => Err(ApiError::Backend(format!(
            "Photo upload failed (HTTP {})",
            status
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_encodes_cloud_name() {
        assert_eq!(
            upload_endpoint("demo cloud"),
            "https://api.cloudinary.com/v1_1/demo%20cloud/image/upload"
        );
    }

    #[test]
    fn host_reply_shapes() {
        let ok: HostedImage =
            serde_json::from_str(r#"{"secure_url":"https://res.example/x.jpg","bytes":12}"#).unwrap();
        assert_eq!(ok.secure_url.as_deref(), Some("https://res.example/x.jpg"));

        let err: HostedImage =
            serde_json::from_str(r#"{"error":{"message":"Upload preset not found"}}"#).unwrap();
        assert_eq!(err.error.unwrap().message, "Upload preset not found");
    }
}
