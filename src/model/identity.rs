use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::role::Role;

/// An authenticated user. Never carries credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 2,
    "email": "employee@example.com",
    "name": "John Employee",
    "role": "employee",
    "position": "Software Developer"
}))]
pub struct Identity {
    #[schema(example = 2)]
    pub id: u64,
    #[schema(example = "employee@example.com")]
    pub email: String,
    #[schema(example = "John Employee")]
    pub name: String,
    pub role: Role,
    #[schema(example = "Software Developer")]
    pub position: String,
}
