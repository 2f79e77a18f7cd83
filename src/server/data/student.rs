//! Student data repository for database operations
//!
//! Provides the `StudentRepository` for managing student records in the database.
//! Provides methods to list, get, create, update, and delete students as well as handles
//! the conversion of database entity models into domain models for usage within services
//! & controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::{
    model::student::StudentId,
    server::model::student::{CreateStudentParam, Student, UpdateStudentParam},
};

/// Repository providing database operations for student management.
///
/// Every method touches at most one row; atomicity is whatever the store gives a
/// single statement.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored student in the store's natural order (ascending ID)
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - All students, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Finds a student by ID
    ///
    /// # Arguments
    /// - `id` - ID of the student to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The requested student if found
    /// - `Ok(None)` - No student has this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id.into_store())
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Creates a new student
    ///
    /// # Arguments
    /// - `param` - Validated fields of the new student
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with its store-assigned ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            name: ActiveValue::Set(param.name),
            roll_number: ActiveValue::Set(param.roll_number),
            email: ActiveValue::Set(param.email),
            department: ActiveValue::Set(param.department),
            year: ActiveValue::Set(param.year),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Updates the provided fields of a student, leaving the rest untouched
    ///
    /// # Arguments
    /// - `id` - ID of the student to update
    /// - `param` - Fields to replace; `None` keeps the stored value
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The student after the update
    /// - `Ok(None)` - No student has this ID, nothing was written
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(
        &self,
        id: StudentId,
        param: UpdateStudentParam,
    ) -> Result<Option<Student>, DbErr> {
        let Some(student) = entity::prelude::Student::find_by_id(id.into_store())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.is_empty() {
            return Ok(Some(Student::from_entity(student)));
        }

        let mut active_model: entity::student::ActiveModel = student.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(roll_number) = param.roll_number {
            active_model.roll_number = ActiveValue::Set(roll_number);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(department) = param.department {
            active_model.department = ActiveValue::Set(department);
        }
        if let Some(year) = param.year {
            active_model.year = ActiveValue::Set(year);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Student::from_entity(entity)))
    }

    /// Deletes the student with the provided ID
    ///
    /// # Arguments
    /// - `id` - ID of the student to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The student existed and was deleted
    /// - `Ok(false)` - No student has this ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: StudentId) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id.into_store())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
