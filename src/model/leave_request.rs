use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::{CoreError, RequestId};
use crate::lifecycle::{Decision, RequestStatus, TrackedRequest};
use crate::model::identity::Identity;

use super::{parse_date, required_text};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LeaveType {
    Vacation,
    SickLeave,
    Personal,
    Bereavement,
    Other,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus for LeaveStatus {
    const PENDING: Self = LeaveStatus::Pending;

    fn resolved(decision: Decision) -> Self {
        match decision {
            Decision::Approve => LeaveStatus::Approved,
            Decision::Reject => LeaveStatus::Rejected,
        }
    }
}

/// Leave submission payload. Every field is optional on the wire so a missing
/// one can be reported by name.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = "vacation")]
    pub leave_type: Option<LeaveType>,
    #[schema(example = "2023-06-15", format = "date", value_type = String)]
    pub start_date: Option<String>,
    #[schema(example = "2023-06-20", format = "date", value_type = String)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub half_day: bool,
    #[schema(example = "Family vacation")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "employee_id": 2,
    "employee_name": "John Employee",
    "leave_type": "vacation",
    "start_date": "2023-06-15",
    "end_date": "2023-06-20",
    "half_day": false,
    "days": 6.0,
    "reason": "Family vacation",
    "status": "approved",
    "applied_on": "2023-05-10",
    "approved_by": "Admin User"
}))]
pub struct LeaveRequest {
    pub id: RequestId,
    pub employee_id: u64,
    pub employee_name: String,
    pub leave_type: LeaveType,
    #[schema(format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(format = "date", value_type = String)]
    pub end_date: NaiveDate,
    pub half_day: bool,
    /// Derived from the date span, see [`day_count`].
    pub days: f64,
    pub reason: String,
    pub status: LeaveStatus,
    #[schema(format = "date", value_type = String)]
    pub applied_on: NaiveDate,
    /// Name of the admin who approved or rejected the request.
    pub approved_by: Option<String>,
}

/// Inclusive number of leave days between `start` and `end`.
///
/// A half-day flag only counts on a single-day span.
pub fn day_count(start: NaiveDate, end: NaiveDate, half_day: bool) -> Result<f64, CoreError> {
    if start > end {
        return Err(CoreError::InvalidInput {
            field: "start_date",
            reason: "must not be after end_date",
        });
    }
    let raw = (end - start).num_days() + 1;
    if half_day && raw == 1 {
        Ok(0.5)
    } else {
        Ok(raw as f64)
    }
}

impl TrackedRequest for LeaveRequest {
    type Draft = CreateLeave;
    type Status = LeaveStatus;

    const KIND: &'static str = "leave";

    fn open(
        id: RequestId,
        owner: &Identity,
        draft: CreateLeave,
        applied_on: NaiveDate,
    ) -> Result<Self, CoreError> {
        let start_date = parse_date("start_date", draft.start_date.as_deref())?;
        let end_date = parse_date("end_date", draft.end_date.as_deref())?;
        let leave_type = draft.leave_type.ok_or(CoreError::missing("leave_type"))?;
        let reason = required_text("reason", draft.reason)?;
        let days = day_count(start_date, end_date, draft.half_day)?;

        Ok(LeaveRequest {
            id,
            employee_id: owner.id,
            employee_name: owner.name.clone(),
            leave_type,
            start_date,
            end_date,
            half_day: draft.half_day,
            days,
            reason,
            status: LeaveStatus::Pending,
            applied_on,
            approved_by: None,
        })
    }

    fn id(&self) -> RequestId {
        self.id
    }

    fn employee_id(&self) -> u64 {
        self.employee_id
    }

    fn status(&self) -> LeaveStatus {
        self.status
    }

    fn resolve(&mut self, status: LeaveStatus, decided_by: &str) {
        self.status = status;
        self.approved_by = Some(decided_by.to_string());
    }
}
