//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Validation**: Turning request DTOs into checked parameter models
//! - **Classification**: Deciding which failures are not-found, client, or store errors
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod student;
