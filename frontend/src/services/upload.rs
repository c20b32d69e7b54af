//! HTTP client for the single-file upload.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::read_json;
use crate::config::{endpoint, UPLOAD_FIELD_NAME, UPLOAD_FILE_PATH};
use crate::types::{AppError, AppResult, FileInfo, UploadFileResponse};

/// Upload `file` as multipart field `file`.
pub async fn upload_file(file: File) -> AppResult<FileInfo> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD_NAME, &file, &file.name())
        .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(&endpoint(UPLOAD_FILE_PATH))
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    read_json::<UploadFileResponse>(response).await?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        // Shape returned by the backend after saving the file
        let json = r#"{
            "success": true,
            "filename": "report.pdf",
            "file_size": "1.5 MB",
            "file_type": "application/pdf"
        }"#;

        let result: Result<UploadFileResponse, _> = serde_json::from_str(json);
        assert!(result.is_ok());

        let response = result.unwrap();
        assert!(response.success);
        assert_eq!(response.file_size.as_deref(), Some("1.5 MB"));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_failure_deserialization() {
        let json = r#"{"success": false, "error": "No file selected"}"#;

        let response: UploadFileResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(
            response.into_result(),
            Err(AppError::Rejected(Some("No file selected".into())))
        );
    }

    #[test]
    fn test_endpoint_is_same_origin() {
        assert_eq!(endpoint(UPLOAD_FILE_PATH), "/upload_file");
    }
}
