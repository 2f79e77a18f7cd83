pub const SITE_NAME: &str = "Student Management";

/// Base URL of the student resource on the gateway.
///
/// Overridable at build time through `STUDENTS_API_URL`.
pub const STUDENTS_API_URL: &str = match option_env!("STUDENTS_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000/api/students",
};

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3000;
