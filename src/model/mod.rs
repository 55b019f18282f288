//! Request and response DTOs shared by the HTTP API and its OpenAPI document.

pub mod api;
pub mod pagination;
pub mod parking_spot;
pub mod user;
