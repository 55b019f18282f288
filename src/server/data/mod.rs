//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every method issues independent queries; no repository opens a transaction.

pub mod parking_spot;
pub mod role;
pub mod user;
