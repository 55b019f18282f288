//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, keeping business rules separate
//! from database and API concerns.

pub mod pagination;
pub mod parking_spot;
pub mod user;
