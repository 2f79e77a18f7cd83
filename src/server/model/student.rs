//! Domain & parameter models for student operations
//!
//! Defines the student domain model, the create/update parameter models with their
//! presence validation, and conversions from entity and into DTOs.

use crate::{
    model::student::{StudentDto, StudentFieldsDto, StudentId},
    server::error::AppError,
};

/// The student domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub department: String,
    pub year: i32,
}

impl Student {
    /// Converts an entity model to the student domain model
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: StudentId::from_store(entity.id),
            name: entity.name,
            roll_number: entity.roll_number,
            email: entity.email,
            department: entity.department,
            year: entity.year,
        }
    }

    /// Converts the domain model into the wire DTO
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            roll_number: self.roll_number,
            email: self.email,
            department: self.department,
            year: self.year,
        }
    }
}

/// Parameters for creating a new student
///
/// Every field is present and non-blank; the identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStudentParam {
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub department: String,
    pub year: i32,
}

/// Parameters for updating an existing student
///
/// `None` keeps the stored value; `Some` replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateStudentParam {
    pub name: Option<String>,
    pub roll_number: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub year: Option<i32>,
}

impl UpdateStudentParam {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Collects validation failures so the client sees all of them at once.
///
/// At most one violation is kept per field.
#[derive(Default)]
struct Violations(Vec<(&'static str, String)>);

impl Violations {
    fn push(&mut self, field: &'static str, message: String) {
        if !self.0.iter().any(|(recorded, _)| *recorded == field) {
            self.0.push((field, message));
        }
    }

    /// Records a violation when a text field is present but blank.
    fn non_blank(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        match value {
            Some(text) if text.trim().is_empty() => {
                self.push(field, format!("{} must not be empty", field));
                None
            }
            other => other,
        }
    }

    /// Records a violation when a field is absent.
    fn required<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(field, format!("{} is required", field));
        }
        value
    }

    fn into_error(self) -> AppError {
        let messages: Vec<String> = self.0.into_iter().map(|(_, message)| message).collect();

        AppError::BadRequest(format!(
            "Student validation failed: {}",
            messages.join(", ")
        ))
    }

    fn into_result(self) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

impl TryFrom<StudentFieldsDto> for CreateStudentParam {
    type Error = AppError;

    fn try_from(dto: StudentFieldsDto) -> Result<Self, Self::Error> {
        let mut v = Violations::default();

        let name = v.non_blank("name", dto.name);
        let name = v.required("name", name);
        let roll_number = v.non_blank("rollNumber", dto.roll_number);
        let roll_number = v.required("rollNumber", roll_number);
        let email = v.non_blank("email", dto.email);
        let email = v.required("email", email);
        let department = v.non_blank("department", dto.department);
        let department = v.required("department", department);
        let year = v.required("year", dto.year);

        match (name, roll_number, email, department, year) {
            (Some(name), Some(roll_number), Some(email), Some(department), Some(year)) => {
                Ok(Self {
                    name,
                    roll_number,
                    email,
                    department,
                    year,
                })
            }
            _ => Err(v.into_error()),
        }
    }
}

impl TryFrom<StudentFieldsDto> for UpdateStudentParam {
    type Error = AppError;

    fn try_from(dto: StudentFieldsDto) -> Result<Self, Self::Error> {
        let mut v = Violations::default();

        let param = Self {
            name: v.non_blank("name", dto.name),
            roll_number: v.non_blank("rollNumber", dto.roll_number),
            email: v.non_blank("email", dto.email),
            department: v.non_blank("department", dto.department),
            year: dto.year,
        };

        v.into_result()?;

        Ok(param)
    }
}
