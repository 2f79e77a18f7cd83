use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::{StudentDto, StudentFieldsDto, StudentMutationDto},
    },
    server::{
        error::AppError, service::student::StudentService, state::AppState,
        util::parse::parse_student_id,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List all students.
///
/// Returns every stored student in the store's natural order.
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Store unreachable or query failed", body = ErrorDto)
    ),
)]
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).list().await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single student by ID.
///
/// Used by the client to populate the edit form. Identifiers that are not valid
/// store keys are answered with 404 like unknown ones.
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = MessageDto),
        (status = 500, description = "Store unreachable or query failed", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&id)?;

    let student = StudentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Create a new student.
///
/// The identifier is assigned by the store and returned with the stored record.
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = StudentFieldsDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentMutationDto),
        (status = 400, description = "Invalid student data", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentFieldsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let student = StudentService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(StudentMutationDto {
            message: "Student added successfully".to_string(),
            student: student.into_dto(),
        }),
    ))
}

/// Update a student by ID.
///
/// Accepts a full or partial field set; absent fields keep their stored value.
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    request_body = StudentFieldsDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentMutationDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student not found", body = MessageDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StudentFieldsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&id)?;
    let Json(payload) = payload?;

    let student = StudentService::new(&state.db).update(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(StudentMutationDto {
            message: "Student updated successfully".to_string(),
            student: student.into_dto(),
        }),
    ))
}

/// Delete a student by ID.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 404, description = "Student not found", body = MessageDto),
        (status = 500, description = "Store unreachable or delete failed", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&id)?;

    StudentService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Student deleted successfully".to_string(),
        }),
    ))
}
