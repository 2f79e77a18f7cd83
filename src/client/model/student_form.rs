//! Add/edit form state.
//!
//! The form is always in exactly one of two modes. `Add` submits a create,
//! `Edit` carries the identifier of the record being edited and submits an
//! update. Nothing else about the form decides which request is sent.

use crate::model::student::{StudentDto, StudentFieldsDto, StudentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit(StudentId),
}

/// The request a submit turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update(StudentId),
}

impl SubmitAction {
    pub fn success_message(&self) -> &'static str {
        match self {
            SubmitAction::Create => "Student added successfully!",
            SubmitAction::Update(_) => "Student updated successfully!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        "Operation failed. Please check your input."
    }
}

/// Raw text of the form inputs plus the mode they are being edited in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub department: String,
    pub year: String,
    mode: FormMode,
}

impl StudentForm {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add New Student",
            FormMode::Edit(_) => "Edit Student",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add Student",
            FormMode::Edit(_) => "Update Student",
        }
    }

    pub fn submit_action(&self) -> SubmitAction {
        match self.mode {
            FormMode::Add => SubmitAction::Create,
            FormMode::Edit(id) => SubmitAction::Update(id),
        }
    }

    /// Fills the inputs from a fetched record and switches to edit mode.
    pub fn begin_edit(&mut self, student: &StudentDto) {
        self.name = student.name.clone();
        self.roll_number = student.roll_number.clone();
        self.email = student.email.clone();
        self.department = student.department.clone();
        self.year = student.year.to_string();
        self.mode = FormMode::Edit(student.id);
    }

    /// Clears the inputs and returns to add mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reads the inputs into a request body.
    ///
    /// Text is sent as typed so the gateway decides what is missing. A year that
    /// does not parse as an integer is left out.
    pub fn to_payload(&self) -> StudentFieldsDto {
        StudentFieldsDto {
            name: Some(self.name.clone()),
            roll_number: Some(self.roll_number.clone()),
            email: Some(self.email.clone()),
            department: Some(self.department.clone()),
            year: self.year.trim().parse::<i32>().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann_lee() -> StudentDto {
        StudentDto {
            id: "7".parse().unwrap(),
            name: "Ann Lee".to_string(),
            roll_number: "R1".to_string(),
            email: "a@x.com".to_string(),
            department: "CS".to_string(),
            year: 2,
        }
    }

    #[test]
    fn starts_in_add_mode() {
        let form = StudentForm::default();

        assert_eq!(form.mode(), FormMode::Add);
        assert_eq!(form.submit_action(), SubmitAction::Create);
        assert_eq!(form.title(), "Add New Student");
        assert_eq!(form.submit_label(), "Add Student");
    }

    #[test]
    fn begin_edit_fills_inputs_and_switches_mode() {
        let mut form = StudentForm::default();
        let student = ann_lee();

        form.begin_edit(&student);

        assert!(form.is_editing());
        assert_eq!(form.mode(), FormMode::Edit(student.id));
        assert_eq!(form.submit_action(), SubmitAction::Update(student.id));
        assert_eq!(form.name, "Ann Lee");
        assert_eq!(form.year, "2");
        assert_eq!(form.submit_label(), "Update Student");
    }

    #[test]
    fn reset_returns_to_add_mode() {
        let mut form = StudentForm::default();
        form.begin_edit(&ann_lee());

        form.reset();

        assert_eq!(form, StudentForm::default());
        assert!(!form.is_editing());
    }

    #[test]
    fn payload_parses_year() {
        let mut form = StudentForm::default();
        form.begin_edit(&ann_lee());
        form.year = " 3 ".to_string();

        let payload = form.to_payload();

        assert_eq!(payload.year, Some(3));
        assert_eq!(payload.name.as_deref(), Some("Ann Lee"));
        assert_eq!(payload.roll_number.as_deref(), Some("R1"));
    }

    #[test]
    fn payload_drops_unparseable_year() {
        let form = StudentForm {
            year: "second".to_string(),
            ..Default::default()
        };

        assert_eq!(form.to_payload().year, None);
    }

    #[test]
    fn success_message_follows_action() {
        let id = "1".parse().unwrap();

        assert_eq!(
            SubmitAction::Create.success_message(),
            "Student added successfully!"
        );
        assert_eq!(
            SubmitAction::Update(id).success_message(),
            "Student updated successfully!"
        );
    }
}
