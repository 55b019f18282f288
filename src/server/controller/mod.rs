//! HTTP request handlers.
//!
//! Handlers convert request DTOs into service parameters, call the service layer, and
//! convert domain models back into response DTOs. Authentication and role checks have
//! already run in the route access middleware by the time a handler executes.

pub mod param;
pub mod parking_spot;
pub mod user;
