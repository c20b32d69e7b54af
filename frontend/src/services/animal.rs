//! HTTP client for the animal image lookup.

use gloo_net::http::Request;

use super::read_json;
use crate::config::{endpoint, SELECT_ANIMAL_PATH};
use crate::types::{AnimalImage, AppError, AppResult, SelectAnimalRequest, SelectAnimalResponse};

/// Ask the backend for the image of `animal`.
pub async fn select_animal(animal: &str) -> AppResult<AnimalImage> {
    let body = SelectAnimalRequest {
        animal: animal.to_string(),
    };

    let request = Request::post(&endpoint(SELECT_ANIMAL_PATH))
        .json(&body)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    read_json::<SelectAnimalResponse>(response).await?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = SelectAnimalRequest {
            animal: "elephant".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "animal": "elephant" })
        );
    }

    #[test]
    fn test_endpoint_is_same_origin() {
        assert_eq!(endpoint(SELECT_ANIMAL_PATH), "/select_animal");
    }
}
