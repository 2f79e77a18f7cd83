#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod student;

#[cfg(feature = "web")]
pub use student::{create_student, delete_student, get_student, get_students, update_student};
