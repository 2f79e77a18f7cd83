use crate::{
    client::{constant::STUDENTS_API_URL, model::error::ApiError},
    model::{
        api::MessageDto,
        student::{StudentDto, StudentFieldsDto, StudentId, StudentMutationDto},
    },
};

use super::helper::{delete, get, parse_response, post, put, send_request, serialize_json};

fn student_url(id: StudentId) -> String {
    format!("{}/{}", STUDENTS_API_URL, id)
}

pub async fn get_students() -> Result<Vec<StudentDto>, ApiError> {
    let response = send_request(get(STUDENTS_API_URL)).await?;
    parse_response(response).await
}

pub async fn get_student(id: StudentId) -> Result<StudentDto, ApiError> {
    let response = send_request(get(&student_url(id))).await?;
    parse_response(response).await
}

pub async fn create_student(payload: StudentFieldsDto) -> Result<StudentMutationDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post(STUDENTS_API_URL).body(body)).await?;
    parse_response(response).await
}

pub async fn update_student(
    id: StudentId,
    payload: StudentFieldsDto,
) -> Result<StudentMutationDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(put(&student_url(id)).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_student(id: StudentId) -> Result<MessageDto, ApiError> {
    let response = send_request(delete(&student_url(id))).await?;
    parse_response(response).await
}
