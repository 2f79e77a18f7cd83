//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. All queries, inserts, updates, and
//! deletes against the student store go through here.

pub mod student;

#[cfg(test)]
mod test;
