use crate::{
    client::model::error::ApiError,
    model::api::{ErrorDto, MessageDto},
};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Parses a success body as `T`, or turns a failure into an [`ApiError`].
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_body(status, response).await)
    }
}

/// Reads the failure body once and prefers `error`, then `message`, then the raw text.
async fn error_from_body(status: u64, response: Response) -> ApiError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    let message = if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(&body) {
        error_dto.error
    } else if let Ok(message_dto) = serde_json::from_str::<MessageDto>(&body) {
        message_dto.message
    } else if body.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        body
    };

    ApiError { status, message }
}

// The gateway sits on another origin and uses no cookies, so requests go out without credentials.

pub fn get(url: &str) -> Request {
    Request::get(url)
}

pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

pub fn put(url: &str) -> Request {
    Request::put(url).header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Send a request, mapping network failures to an [`ApiError`].
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to send request: {}", e)))
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::transport(format!("Failed to serialize request: {}", e)))
}
