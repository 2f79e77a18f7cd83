//! HTTP request handlers.
//!
//! Controllers extract path and body input, hand it to the service layer, and convert
//! the resulting domain models into DTOs. Every handler is annotated for the OpenAPI
//! document served by the router.

pub mod status;
pub mod student;

#[cfg(test)]
mod test;
