//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let student = factory::create_student(&db).await?;
//!
//! // Using builder pattern for customization
//! let student = factory::student::StudentFactory::new(&db)
//!     .name("Ann Lee")
//!     .year(2)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod student;

pub use student::{create_student, create_students};
