use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    #[schema(example = json!(["ROLE_ADMIN", "ROLE_USER"]))]
    pub roles: Vec<String>,
}
