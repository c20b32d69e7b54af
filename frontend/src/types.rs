//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Backend request/response bodies
//! - **View Types** - What the page displays (image panel, file info)
//! - **Message Types** - Transient status banners
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Types
// =============================================================================

/// Body sent to `POST /select_animal`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectAnimalRequest {
    pub animal: String,
}

/// Response from `POST /select_animal`.
///
/// Failures are reported in-band with `success: false`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelectAnimalResponse {
    pub success: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub animal: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SelectAnimalResponse {
    /// Turn the wire response into the image to display.
    pub fn into_result(self) -> AppResult<AnimalImage> {
        if !self.success {
            return Err(AppError::Rejected(self.error));
        }
        let image_url = self
            .image_url
            .ok_or_else(|| AppError::Decode("missing image_url".to_string()))?;
        let animal = self
            .animal
            .ok_or_else(|| AppError::Decode("missing animal".to_string()))?;
        Ok(AnimalImage::new(animal, image_url))
    }
}

/// Response from `POST /upload_file`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UploadFileResponse {
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    /// Human readable size, formatted by the backend ("12.0 KB").
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadFileResponse {
    /// Turn the wire response into the metadata to display.
    pub fn into_result(self) -> AppResult<FileInfo> {
        if !self.success {
            return Err(AppError::Rejected(self.error));
        }
        let name = self
            .filename
            .ok_or_else(|| AppError::Decode("missing filename".to_string()))?;
        Ok(FileInfo {
            name,
            size: self.file_size.unwrap_or_else(|| UNKNOWN.to_string()),
            content_type: self.file_type.unwrap_or_else(|| UNKNOWN.to_string()),
        })
    }
}

const UNKNOWN: &str = "Unknown";

// =============================================================================
// View Types
// =============================================================================

/// Image shown in the animal panel.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimalImage {
    /// Animal name as returned by the backend (used as `alt`)
    pub animal: String,
    /// Name shown under the image
    pub display_name: String,
    pub image_url: String,
}

impl AnimalImage {
    pub fn new(animal: String, image_url: String) -> Self {
        let display_name = capitalize(&animal);
        Self {
            animal,
            display_name,
            image_url,
        }
    }
}

/// Metadata of the last uploaded file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileInfo {
    pub name: String,
    pub size: String,
    pub content_type: String,
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Message Types
// =============================================================================

/// Severity of a transient message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Identifies one shown message, so a late timer cannot remove its successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub u64);

/// A transient status banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    /// Classes for the message `<div>` (`message success`, `message error`).
    pub fn class_name(&self) -> String {
        format!("message {}", self.kind.css_class())
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// User input is missing (no file chosen).
    Validation(String),
    /// Backend answered `success: false`, with its error text if any.
    Rejected(Option<String>),
    /// Request could not be sent or the server failed outside the JSON contract.
    Network(String),
    /// Response body is not the expected JSON.
    Decode(String),
}

impl AppError {
    /// Text to show the user.
    ///
    /// `fallback` covers a rejection without error text, `generic` covers
    /// transport and decoding failures.
    pub fn user_message(&self, fallback: &str, generic: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Rejected(Some(msg)) if !msg.is_empty() => msg.clone(),
            AppError::Rejected(_) => fallback.to_string(),
            AppError::Network(_) | AppError::Decode(_) => generic.to_string(),
        }
    }

    /// Whether this is a transport-level failure worth a console error.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Decode(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Rejected(Some(msg)) => write!(f, "Rejected by server: {}", msg),
            AppError::Rejected(None) => write!(f, "Rejected by server"),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_animal_success() {
        let json = r#"{"success": true, "animal": "cat", "image_url": "/static/images/cat.jpg"}"#;
        let response: SelectAnimalResponse = serde_json::from_str(json).unwrap();

        let image = response.into_result().unwrap();
        assert_eq!(image.animal, "cat");
        assert_eq!(image.display_name, "Cat");
        assert_eq!(image.image_url, "/static/images/cat.jpg");
    }

    #[test]
    fn test_select_animal_rejected() {
        let json = r#"{"success": false, "error": "Invalid animal selection"}"#;
        let response: SelectAnimalResponse = serde_json::from_str(json).unwrap();

        let err = response.into_result().unwrap_err();
        assert_eq!(err, AppError::Rejected(Some("Invalid animal selection".into())));
        assert_eq!(
            err.user_message("fallback", "generic"),
            "Invalid animal selection"
        );
    }

    #[test]
    fn test_select_animal_success_without_url_is_decode_error() {
        let json = r#"{"success": true, "animal": "dog"}"#;
        let response: SelectAnimalResponse = serde_json::from_str(json).unwrap();

        assert!(matches!(response.into_result(), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_upload_success_keeps_backend_strings() {
        let json = r#"{
            "success": true,
            "filename": "a.txt",
            "file_size": "12",
            "file_type": "text/plain"
        }"#;
        let response: UploadFileResponse = serde_json::from_str(json).unwrap();

        let info = response.into_result().unwrap();
        assert_eq!(
            info,
            FileInfo {
                name: "a.txt".into(),
                size: "12".into(),
                content_type: "text/plain".into(),
            }
        );
    }

    #[test]
    fn test_upload_missing_type_shows_unknown() {
        let json = r#"{"success": true, "filename": "notes", "file_size": "0B"}"#;
        let response: UploadFileResponse = serde_json::from_str(json).unwrap();

        let info = response.into_result().unwrap();
        assert_eq!(info.content_type, "Unknown");
        assert_eq!(info.size, "0B");
    }

    #[test]
    fn test_rejection_without_text_uses_fallback() {
        let response: UploadFileResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = response.into_result().unwrap_err();

        assert_eq!(err.user_message("Upload failed", "generic"), "Upload failed");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_errors_use_generic_text() {
        let err = AppError::Network("connection refused".into());
        assert!(err.is_transport());
        assert_eq!(err.user_message("fallback", "generic"), "generic");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("elephant"), "Elephant");
        assert_eq!(capitalize("Dog"), "Dog");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_message_class_name() {
        let message = Message {
            id: MessageId(1),
            text: "hi".into(),
            kind: MessageKind::Error,
        };
        assert_eq!(message.class_name(), "message error");
    }
}
