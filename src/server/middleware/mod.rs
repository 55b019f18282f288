//! Request authentication and per-route authorization.
//!
//! `auth` holds the `AuthGuard` that resolves HTTP basic credentials to a user and checks
//! role permissions. `access` holds the table of role requirements per route and the
//! middleware that applies it before any handler runs.

pub mod access;
pub mod auth;

#[cfg(test)]
mod test;
