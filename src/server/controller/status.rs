pub static STATUS_TAG: &str = "status";

/// Plain-text liveness confirmation.
pub const LIVENESS_MESSAGE: &str = "Student Management Backend is running successfully";

#[utoipa::path(
    get,
    path = "/",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Backend is running", body = String, content_type = "text/plain")
    ),
)]
pub async fn index() -> &'static str {
    LIVENESS_MESSAGE
}
