//! Student factory for creating test student entities.
//!
//! This module provides factory methods for creating student entities with
//! sensible unique defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .name("Ann Lee")
///     .department("CS")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    roll_number: String,
    email: String,
    department: String,
    year: i32,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"`
    /// - roll_number: `"R{id}"`
    /// - email: `"student{id}@example.com"`
    /// - department: `"Computer Science"`
    /// - year: `1`
    ///
    /// where id is auto-incremented per factory.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Student {}", id),
            roll_number: format!("R{}", id),
            email: format!("student{}@example.com", id),
            department: "Computer Science".to_string(),
            year: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn roll_number(mut self, roll_number: impl Into<String>) -> Self {
        self.roll_number = roll_number.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity with store-assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            roll_number: ActiveValue::Set(self.roll_number),
            email: ActiveValue::Set(self.email),
            department: ActiveValue::Set(self.department),
            year: ActiveValue::Set(self.year),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates `count` students with default values, returned in insertion order.
pub async fn create_students(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::student::Model>, DbErr> {
    let mut students = Vec::with_capacity(count);
    for _ in 0..count {
        students.push(create_student(db).await?);
    }

    Ok(students)
}
