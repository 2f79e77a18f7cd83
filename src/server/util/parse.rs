use crate::{model::student::StudentId, server::error::AppError};

/// Parses a student identifier from a path segment.
///
/// A segment that cannot be a store key cannot name a stored record, so it is
/// answered the same way as an unknown identifier.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(StudentId)` - Successfully parsed identifier
/// - `Err(AppError::NotFound)` - Segment is not a valid identifier
pub fn parse_student_id(value: &str) -> Result<StudentId, AppError> {
    value
        .parse::<StudentId>()
        .map_err(|_| AppError::student_not_found())
}
