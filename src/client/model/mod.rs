//! View state for the student page, independent of the rendering target.

pub mod error;
pub mod student_form;
pub mod table;
pub mod toast;
