//! Request lifecycle: submission, role-filtered reads and the one-shot
//! admin decision shared by leave requests and absence justifications.

pub mod book;
pub mod registry;

use std::fmt::Debug;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::policy::Action;
use crate::error::{CoreError, RequestId};
use crate::model::identity::Identity;

pub use book::RequestBook;
pub use registry::RequestRegistry;

/// An admin's verdict on a pending request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn action(self) -> Action {
        match self {
            Decision::Approve => Action::ApproveRequest,
            Decision::Reject => Action::RejectRequest,
        }
    }
}

/// Closed status set of one request kind.
pub trait RequestStatus: Copy + Eq + Debug + FromStr {
    const PENDING: Self;

    /// Terminal status reached through `decision`.
    fn resolved(decision: Decision) -> Self;

    fn is_pending(self) -> bool {
        self == Self::PENDING
    }
}

/// A request kind managed by a [`RequestBook`].
pub trait TrackedRequest: Clone {
    type Draft;
    type Status: RequestStatus;

    const KIND: &'static str;

    /// Validates `draft` and builds a pending request owned by `owner`.
    fn open(
        id: RequestId,
        owner: &Identity,
        draft: Self::Draft,
        applied_on: NaiveDate,
    ) -> Result<Self, CoreError>;

    fn id(&self) -> RequestId;
    fn employee_id(&self) -> u64;
    fn status(&self) -> Self::Status;

    /// Records a terminal status and the admin who set it.
    fn resolve(&mut self, status: Self::Status, decided_by: &str);
}

/// Status counts over the requests visible to one caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RequestSummary {
    #[schema(example = 5)]
    pub total: usize,
    #[schema(example = 2)]
    pub pending: usize,
    /// Approved leave or justified absences.
    #[schema(example = 2)]
    pub accepted: usize,
    #[schema(example = 1)]
    pub rejected: usize,
}

/// Parses a `?status=` filter. Missing or `all` means no restriction.
pub fn parse_status_filter<S: RequestStatus>(raw: Option<&str>) -> Result<Option<S>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => s.parse::<S>().map(Some).map_err(|_| CoreError::InvalidInput {
            field: "status",
            reason: "is not a known status",
        }),
    }
}
