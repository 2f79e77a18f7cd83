//! Student service: the five gateway operations.
//!
//! Each operation maps to exactly one repository call and touches at most one record.
//! Status classification follows the REST contract:
//!
//! | operation | absent record | validation | store failure |
//! |---|---|---|---|
//! | list | - | - | 500 |
//! | get | 404 | - | 500 |
//! | create | - | 400 | 400 |
//! | update | 404 | 400 | 400 |
//! | delete | 404 | - | 500 |

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::student::{StudentFieldsDto, StudentId},
    server::{
        data::student::StudentRepository,
        error::AppError,
        model::student::{CreateStudentParam, Student, UpdateStudentParam},
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every stored student
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - All students in the store's natural order
    /// - `Err(AppError::DbErr)` - Store unreachable or query failed
    pub async fn list(&self) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db).get_all().await?;

        Ok(students)
    }

    /// Gets a single student
    ///
    /// # Returns
    /// - `Ok(Student)` - The requested student
    /// - `Err(AppError::NotFound)` - No student has this ID
    /// - `Err(AppError::DbErr)` - Store unreachable or query failed
    pub async fn get_by_id(&self, id: StudentId) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::student_not_found)
    }

    /// Validates and stores a new student
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student with its assigned ID
    /// - `Err(AppError::BadRequest)` - Missing/blank fields or the store rejected the insert
    pub async fn create(&self, fields: StudentFieldsDto) -> Result<Student, AppError> {
        let param = CreateStudentParam::try_from(fields)?;

        let student = StudentRepository::new(self.db)
            .create(param)
            .await
            .map_err(AppError::bad_request_from)?;

        tracing::info!("Created student {}", student.id);

        Ok(student)
    }

    /// Replaces the provided fields of an existing student
    ///
    /// # Returns
    /// - `Ok(Student)` - The student after the update
    /// - `Err(AppError::NotFound)` - No student has this ID; nothing is created
    /// - `Err(AppError::BadRequest)` - Blank fields or the store rejected the update
    pub async fn update(
        &self,
        id: StudentId,
        fields: StudentFieldsDto,
    ) -> Result<Student, AppError> {
        let param = UpdateStudentParam::try_from(fields)?;

        let student = StudentRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(AppError::bad_request_from)?
            .ok_or_else(AppError::student_not_found)?;

        tracing::info!("Updated student {}", student.id);

        Ok(student)
    }

    /// Deletes a student
    ///
    /// # Returns
    /// - `Ok(())` - The student existed and was removed
    /// - `Err(AppError::NotFound)` - No student has this ID
    /// - `Err(AppError::DbErr)` - Store unreachable or delete failed
    pub async fn delete(&self, id: StudentId) -> Result<(), AppError> {
        let deleted = StudentRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::student_not_found());
        }

        tracing::info!("Deleted student {}", id);

        Ok(())
    }
}
