use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::identity::Identity;
use crate::model::role::Role;

#[derive(Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "employee@example.com")]
    pub email: String,
    #[schema(example = "employee123")]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub identity: Identity,
}

#[derive(Serialize, ToSchema)]
pub struct MeResponse {
    pub identity: Identity,
    pub role: Role,
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: u64,
    /// Email of the identity.
    pub sub: String,
    pub name: String,
    pub position: String,
    pub role: u8, // role id
    pub exp: usize,
    pub jti: String,
}

impl Claims {
    /// Rebuilds the identity carried by the token. `None` for an unknown role id.
    pub fn identity(&self) -> Option<Identity> {
        Some(Identity {
            id: self.user_id,
            email: self.sub.clone(),
            name: self.name.clone(),
            role: Role::from_id(self.role)?,
            position: self.position.clone(),
        })
    }
}
