use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{CoreError, RequestId};
use crate::model::identity::Identity;

use super::{Decision, RequestBook, RequestSummary, TrackedRequest};

/// A [`RequestBook`] shared between server workers.
///
/// `submit` and `decide` hold the write lock for the whole check-and-set, so
/// of two racing decisions on one id exactly one sees `Pending`.
pub struct RequestRegistry<R: TrackedRequest> {
    book: RwLock<RequestBook<R>>,
}

impl<R: TrackedRequest> Default for RequestRegistry<R> {
    fn default() -> Self {
        Self::new(RequestBook::default())
    }
}

impl<R: TrackedRequest> RequestRegistry<R> {
    pub fn new(book: RequestBook<R>) -> Self {
        Self {
            book: RwLock::new(book),
        }
    }

    // Status updates are single assignments after every check, so a poisoned
    // lock still guards a consistent book.
    fn read(&self) -> RwLockReadGuard<'_, RequestBook<R>> {
        self.book.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RequestBook<R>> {
        self.book.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn submit(&self, identity: &Identity, draft: R::Draft) -> Result<R, CoreError> {
        self.write().submit(identity, draft)
    }

    pub fn list_for(
        &self,
        identity: &Identity,
        status: Option<R::Status>,
    ) -> Result<Vec<R>, CoreError> {
        self.read().list_for(identity, status)
    }

    pub fn find_for(&self, identity: &Identity, id: RequestId) -> Result<R, CoreError> {
        self.read().find_for(identity, id)
    }

    pub fn summary_for(&self, identity: &Identity) -> Result<RequestSummary, CoreError> {
        self.read().summary_for(identity)
    }

    pub fn decide(
        &self,
        identity: &Identity,
        id: RequestId,
        decision: Decision,
    ) -> Result<R, CoreError> {
        self.write().decide(identity, id, decision)
    }
}
