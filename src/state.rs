use crate::auth::directory::Directory;
use crate::lifecycle::RequestRegistry;
use crate::model::absence::AbsenceJustification;
use crate::model::leave_request::LeaveRequest;
use crate::utils::token_denylist::TokenDenylist;

/// Everything the HTTP handlers share.
pub struct AppState {
    pub leaves: RequestRegistry<LeaveRequest>,
    pub absences: RequestRegistry<AbsenceJustification>,
    pub directory: Directory,
    pub denylist: TokenDenylist,
}

impl AppState {
    pub fn new(directory: Directory, access_token_ttl: usize) -> Self {
        Self {
            leaves: RequestRegistry::default(),
            absences: RequestRegistry::default(),
            directory,
            denylist: TokenDenylist::new(access_token_ttl as u64),
        }
    }
}
