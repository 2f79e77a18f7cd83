//! Rows shown in the student table.

use crate::{
    client::model::error::ApiError,
    model::student::{StudentDto, StudentId},
};

pub const EMPTY_PLACEHOLDER: &str = "No students found. Add your first student!";

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub id: StudentId,
    pub initials: String,
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub department: String,
    pub year: i32,
}

impl From<&StudentDto> for StudentRow {
    fn from(student: &StudentDto) -> Self {
        Self {
            id: student.id,
            initials: initials(&student.name),
            name: student.name.clone(),
            roll_number: student.roll_number.clone(),
            email: student.email.clone(),
            department: student.department.clone(),
            year: student.year,
        }
    }
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// First load still in flight.
    Loading,
    /// The list came back empty; render the placeholder row.
    Empty,
    Rows(Vec<StudentRow>),
    Failed(String),
}

impl TableView {
    pub fn from_students(students: &[StudentDto]) -> Self {
        if students.is_empty() {
            TableView::Empty
        } else {
            TableView::Rows(students.iter().map(StudentRow::from).collect())
        }
    }

    pub fn from_result(result: Option<&Result<Vec<StudentDto>, ApiError>>) -> Self {
        match result {
            None => TableView::Loading,
            Some(Ok(students)) => Self::from_students(students),
            Some(Err(err)) => TableView::Failed(err.message.clone()),
        }
    }
}

/// The last list the table was rendered from.
///
/// A failed reload never replaces rows that are already on screen; it only
/// shows up in the table when nothing has loaded yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentList {
    loaded: Option<Result<Vec<StudentDto>, ApiError>>,
}

impl StudentList {
    pub fn apply(&mut self, result: Result<Vec<StudentDto>, ApiError>) {
        if result.is_err() && matches!(self.loaded, Some(Ok(_))) {
            return;
        }
        self.loaded = Some(result);
    }

    pub fn view(&self) -> TableView {
        TableView::from_result(self.loaded.as_ref())
    }
}

/// Up to two uppercase initials, one per word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
