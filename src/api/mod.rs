pub mod absence;
pub mod employee;
pub mod leave_request;

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct StatusQuery {
    /// Filter by status; `All` or omitted returns every visible request
    #[schema(example = "pending")]
    pub status: Option<String>,
}
