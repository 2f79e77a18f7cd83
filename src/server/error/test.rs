use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

use super::*;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn not_found_uses_message_body() {
    let response = AppError::student_not_found().into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "message": "Student not found" })
    );
}

#[tokio::test]
async fn bad_request_uses_error_body() {
    let response = AppError::BadRequest("name is required".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "name is required" })
    );
}

#[tokio::test]
async fn store_error_exposes_underlying_message() {
    let err = sea_orm::DbErr::Custom("connection refused".to_string());
    let expected = err.to_string();

    let response = AppError::from(err).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], expected);
}

#[tokio::test]
async fn config_error_hides_details() {
    let response =
        AppError::from(ConfigError::MissingEnvVar("DATABASE_URL".to_string())).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Internal Server Error");
}

#[test]
fn store_failure_on_write_becomes_bad_request() {
    let err = AppError::bad_request_from(sea_orm::DbErr::Custom("constraint".to_string()));

    assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("constraint")));
}

#[tokio::test]
async fn malformed_json_body_becomes_bad_request() {
    use axum::{body::Body, extract::FromRequest, http::Request};

    use crate::model::student::StudentFieldsDto;

    let request = Request::builder()
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name": "Ann", "year": "two"#))
        .unwrap();

    let rejection = Json::<StudentFieldsDto>::from_request(request, &())
        .await
        .unwrap_err();
    let response = AppError::from(rejection).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}
