//! The single role × action table behind every authorization decision.

use strum_macros::{Display, EnumIter};

use crate::error::CoreError;
use crate::model::role::Role;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    ViewOwnRequests,
    ViewAllRequests,
    CreateRequest,
    ApproveRequest,
    RejectRequest,
    ViewEmployeeDirectory,
}

/// Whether `role` may perform `action`. No role means unauthenticated.
///
/// Admins decide requests but never submit them.
pub fn can_perform(role: Option<Role>, action: Action) -> bool {
    use Action::*;

    match (role, action) {
        (None, _) => false,
        (Some(Role::Employee), ViewOwnRequests | CreateRequest) => true,
        (
            Some(Role::Employee),
            ViewAllRequests | ApproveRequest | RejectRequest | ViewEmployeeDirectory,
        ) => false,
        (Some(Role::Admin), CreateRequest) => false,
        (
            Some(Role::Admin),
            ViewOwnRequests
            | ViewAllRequests
            | ApproveRequest
            | RejectRequest
            | ViewEmployeeDirectory,
        ) => true,
    }
}

/// [`can_perform`] as a `Result`, logging the denial.
pub fn require(role: Option<Role>, action: Action) -> Result<(), CoreError> {
    if can_perform(role, action) {
        Ok(())
    } else {
        tracing::warn!(?role, %action, "authorization denied");
        Err(CoreError::Forbidden)
    }
}
