//! Application configuration.
//!
//! Centralized configuration for the Animal Upload page.
//! These are hardcoded; the page is served by the same backend
//! that answers the two endpoints below.

/// Backend base URL.
///
/// Empty means same origin as the page.
pub const BACKEND_URL: &str = "";

/// Animal selection endpoint (JSON body `{ "animal": ... }`).
pub const SELECT_ANIMAL_PATH: &str = "/select_animal";

/// File upload endpoint (multipart body).
pub const UPLOAD_FILE_PATH: &str = "/upload_file";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Animals offered as checkboxes, in display order.
pub const ANIMALS: &[&str] = &["cat", "dog", "elephant"];

/// How long a transient message stays on the page (in milliseconds).
pub const MESSAGE_TIMEOUT_MS: u32 = 5_000;

/// Drop target background while a drag hovers it.
pub const DROP_HIGHLIGHT_BACKGROUND: &str = "#e2e8f0";

/// Drop target transform while a drag hovers it.
pub const DROP_HIGHLIGHT_TRANSFORM: &str = "scale(1.02)";

// =============================================================================
// User-facing strings
// =============================================================================

pub const UPLOAD_LABEL: &str = "Upload";
pub const UPLOADING_LABEL: &str = "Uploading...";

pub const MSG_NO_FILE: &str = "Please select a file first.";
pub const MSG_UPLOAD_OK: &str = "File uploaded successfully!";
pub const MSG_UPLOAD_FAILED: &str = "Upload failed";
pub const MSG_UPLOAD_ERROR: &str = "An error occurred during upload";
pub const MSG_DROP_OK: &str = "File dropped successfully! Click Upload to proceed.";
pub const MSG_ANIMAL_FAILED: &str = "Failed to load animal image";
pub const MSG_ANIMAL_ERROR: &str = "An error occurred while selecting the animal";

/// Full URL for an endpoint path.
pub fn endpoint(path: &str) -> String {
    format!("{}{}", BACKEND_URL, path)
}
