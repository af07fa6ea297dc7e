use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument, warn};

use crate::auth::policy::{Action, can_perform, require};
use crate::error::{CoreError, RequestId};
use crate::model::identity::Identity;

use super::{Decision, RequestStatus, RequestSummary, TrackedRequest};

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Owned collection of one request kind.
///
/// Ids increase with every submission, so iterating the map backwards yields
/// the newest request first. Callers only ever get clones.
pub struct RequestBook<R: TrackedRequest> {
    requests: BTreeMap<RequestId, R>,
    next_id: RequestId,
    today: fn() -> NaiveDate,
}

impl<R: TrackedRequest> Default for RequestBook<R> {
    fn default() -> Self {
        Self::with_clock(utc_today)
    }
}

impl<R: TrackedRequest> RequestBook<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `today` to stamp `applied_on`.
    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        Self {
            requests: BTreeMap::new(),
            next_id: 1,
            today,
        }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    #[instrument(
        name = "request_submit",
        skip_all,
        fields(kind = R::KIND, employee_id = identity.id)
    )]
    pub fn submit(&mut self, identity: &Identity, draft: R::Draft) -> Result<R, CoreError> {
        require(Some(identity.role), Action::CreateRequest)?;

        let id = self.next_id;
        let request = R::open(id, identity, draft, (self.today)()).inspect_err(|e| {
            info!(error = %e, "Submission rejected");
        })?;

        self.next_id += 1;
        self.requests.insert(id, request.clone());
        info!(request_id = id, "Request submitted");
        Ok(request)
    }

    /// Requests visible to `identity`, newest first, optionally narrowed to
    /// one status.
    pub fn list_for(
        &self,
        identity: &Identity,
        status: Option<R::Status>,
    ) -> Result<Vec<R>, CoreError> {
        let visible = self.visible_to(identity)?;
        Ok(visible
            .filter(|r| status.is_none_or(|s| r.status() == s))
            .cloned()
            .collect())
    }

    /// A single request, reported as missing when `identity` may not see it.
    pub fn find_for(&self, identity: &Identity, id: RequestId) -> Result<R, CoreError> {
        require(Some(identity.role), Action::ViewOwnRequests)?;
        self.requests
            .get(&id)
            .filter(|r| Self::sees(identity, *r))
            .cloned()
            .ok_or(CoreError::NotFound { id })
    }

    pub fn summary_for(&self, identity: &Identity) -> Result<RequestSummary, CoreError> {
        let accepted = R::Status::resolved(Decision::Approve);
        let rejected = R::Status::resolved(Decision::Reject);

        let mut summary = RequestSummary::default();
        for request in self.visible_to(identity)? {
            summary.total += 1;
            match request.status() {
                s if s.is_pending() => summary.pending += 1,
                s if s == accepted => summary.accepted += 1,
                s if s == rejected => summary.rejected += 1,
                _ => {}
            }
        }
        Ok(summary)
    }

    /// Moves a pending request to the terminal status of `decision`.
    #[instrument(
        name = "request_decide",
        skip_all,
        fields(kind = R::KIND, request_id = id, ?decision)
    )]
    pub fn decide(
        &mut self,
        identity: &Identity,
        id: RequestId,
        decision: Decision,
    ) -> Result<R, CoreError> {
        require(Some(identity.role), decision.action())?;

        let request = self.requests.get_mut(&id).ok_or(CoreError::NotFound { id })?;
        if !request.status().is_pending() {
            warn!(status = ?request.status(), "Request already decided");
            return Err(CoreError::InvalidState { id });
        }

        request.resolve(R::Status::resolved(decision), &identity.name);
        info!(decided_by = %identity.name, status = ?request.status(), "Request decided");
        Ok(request.clone())
    }

    fn visible_to<'a>(
        &'a self,
        identity: &'a Identity,
    ) -> Result<impl Iterator<Item = &'a R> + 'a, CoreError> {
        require(Some(identity.role), Action::ViewOwnRequests)?;
        debug!(kind = R::KIND, employee_id = identity.id, "Listing requests");
        Ok(self
            .requests
            .values()
            .rev()
            .filter(move |r| Self::sees(identity, r)))
    }

    fn sees(identity: &Identity, request: &R) -> bool {
        can_perform(Some(identity.role), Action::ViewAllRequests)
            || request.employee_id() == identity.id
    }
}
