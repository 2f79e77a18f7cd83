use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::{StudentDto, StudentFieldsDto, StudentMutationDto},
    },
    server::{
        controller::{status, student},
        state::AppState,
    },
};


/// Builds application state over an in-memory store with the student table.
async fn student_state() -> AppState {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();

    AppState::new(test.db.unwrap())
}

/// Builds application state over an in-memory store with no tables.
async fn broken_state() -> AppState {
    let test = TestBuilder::new().build().await.unwrap();

    AppState::new(test.db.unwrap())
}

/// Splits a response into its status and decoded JSON body.
async fn read_json<T: DeserializeOwned>(response: Response) -> (StatusCode, T) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ann_lee() -> StudentFieldsDto {
    StudentFieldsDto {
        name: Some("Ann Lee".to_string()),
        roll_number: Some("R1".to_string()),
        email: Some("a@x.com".to_string()),
        department: Some("CS".to_string()),
        year: Some(2),
    }
}

#[tokio::test]
async fn index_returns_liveness_text() {
    let response = status::index().await.into_response();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, status::LIVENESS_MESSAGE.as_bytes());
}
