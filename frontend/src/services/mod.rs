//! Backend services.
//!
//! Both endpoints answer JSON with an in-band `success` flag:
//!
//! - [`animal`] - `POST /select_animal`, JSON body
//! - [`upload`] - `POST /upload_file`, multipart body

pub mod animal;
pub mod upload;

pub use animal::*;
pub use upload::*;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::types::{AppError, AppResult};

/// Read a JSON body whatever the HTTP status.
///
/// The backend reports failures with `success: false` and a 200, so the
/// status only matters when the body is not JSON (proxy error pages, 413...).
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let ok = response.ok();
    let status = response.status();

    match response.json::<T>().await {
        Ok(body) => Ok(body),
        Err(e) if !ok => Err(AppError::Network(format!("Server error ({}): {}", status, e))),
        Err(e) => Err(AppError::Decode(format!("Failed to parse response: {}", e))),
    }
}
