use crate::shared::api_utils::{api_url, employee_url, read_reply};
use contracts::domain::a001_employee::aggregate::{
    BadgeArtifacts, Employee, EmployeeDetailsResponse, EmployeeId, EmployeePayload,
    ListEmployeesResponse, SaveEmployeeResponse, StatusResponse,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::pager::ListQuery;
use gloo_net::http::{Request, RequestBuilder};
use web_sys::{File, FormData};

/// How create/update bodies are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    Multipart,
    Json,
}

fn network(e: impl std::fmt::Display) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Fetch one page of employees
pub async fn list_employees(query: &ListQuery) -> Result<Vec<Employee>, ApiError> {
    let qs = query
        .to_query_string()
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let url = format!("{}?{}", api_url("/api/employees"), qs);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network)?;

    let reply: ListEmployeesResponse = read_reply(response, "Failed to fetch").await?;
    Ok(reply.employees)
}

/// Fetch a single employee together with the rendered badge artifacts
pub async fn fetch_employee(id: &EmployeeId) -> Result<EmployeeDetailsResponse, ApiError> {
    let response = Request::get(&employee_url(id.as_str()))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network)?;

    let reply: EmployeeDetailsResponse = read_reply(response, "Employee not found").await?;
    if reply.employee.is_none() {
        return Err(ApiError::Backend("Employee not found".to_string()));
    }
    Ok(reply)
}

fn multipart_body(payload: &EmployeePayload, photo: Option<&File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    for (key, value) in payload.form_entries() {
        form.append_with_str(key, &value)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }
    if let Some(file) = photo {
        form.append_with_blob_and_filename("photo", file, &file.name())
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }
    Ok(form)
}

async fn send_save(
    builder: RequestBuilder,
    payload: &EmployeePayload,
    photo: Option<&File>,
    encoding: BodyEncoding,
) -> Result<SaveEmployeeResponse, ApiError> {
    // a file can only travel in a multipart body
    let request = if encoding == BodyEncoding::Multipart || photo.is_some() {
        builder.body(multipart_body(payload, photo)?).map_err(network)?
    } else {
        builder.json(payload).map_err(network)?
    };
    let response = request.send().await.map_err(network)?;
    read_reply(response, "Server error").await
}

/// Create a new employee
pub async fn create_employee(
    payload: &EmployeePayload,
    photo: Option<&File>,
    encoding: BodyEncoding,
) -> Result<BadgeArtifacts, ApiError> {
    let url = api_url("/api/employees");
    log::debug!("POST {} (photo attached: {})", url, photo.is_some());

    let reply = send_save(Request::post(&url), payload, photo, encoding).await?;
    BadgeArtifacts::from_save(reply, None)
        .ok_or_else(|| ApiError::Decode("response is missing employee_id".to_string()))
}

/// Update an existing employee
pub async fn update_employee(
    id: &EmployeeId,
    payload: &EmployeePayload,
    photo: Option<&File>,
    encoding: BodyEncoding,
) -> Result<BadgeArtifacts, ApiError> {
    let url = employee_url(id.as_str());
    log::debug!(
        "PUT {} (photo action: {:?}, photo attached: {})",
        url,
        payload.photo_action,
        photo.is_some()
    );

    let reply = send_save(Request::put(&url), payload, photo, encoding).await?;
    BadgeArtifacts::from_save(reply, Some(id))
        .ok_or_else(|| ApiError::Decode("response is missing employee_id".to_string()))
}

/// Delete an employee; the backend removes the stored photo as well
pub async fn delete_employee(id: &EmployeeId) -> Result<(), ApiError> {
    let url = employee_url(id.as_str());
    log::debug!("DELETE {}", url);

    let response = Request::delete(&url).send().await.map_err(network)?;
    let _: StatusResponse = read_reply(response, "Delete failed").await?;
    Ok(())
}
