mod access;
mod auth;
