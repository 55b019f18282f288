use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned when a request payload fails field validation.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ValidationErrorDto {
    pub error: String,
    /// Field name (camelCase, as sent by the client) to validation messages.
    pub fields: BTreeMap<String, Vec<String>>,
}
