use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dioxus_logger::tracing;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        controller::{status, student},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Records API",
        description = "Create, read, update and delete student records"
    ),
    tags(
        (name = "student", description = "Student record operations"),
        (name = "status", description = "Liveness check")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(status::index))
        .routes(routes!(student::list_students, student::create_student))
        .routes(routes!(
            student::get_student,
            student::update_student,
            student::delete_student
        ))
        .split_for_parts();

    router
        // Same handlers with a trailing slash; kept out of the OpenAPI document.
        .route(
            "/api/students/",
            get(student::list_students).post(student::create_student),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
}

async fn route_not_found() -> (StatusCode, Json<MessageDto>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageDto {
            message: "Route not found".to_string(),
        }),
    )
}

/// Last-resort handler for failures no controller caught.
pub(crate) fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!("Error: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            error: "Internal Server Error".to_string(),
        }),
    )
        .into_response()
}
