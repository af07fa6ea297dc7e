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
pub enum AbsenceType {
    SickLeave,
    Personal,
    Unplanned,
    Other,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbsenceStatus {
    Pending,
    Justified,
    Rejected,
}

impl RequestStatus for AbsenceStatus {
    const PENDING: Self = AbsenceStatus::Pending;

    fn resolved(decision: Decision) -> Self {
        match decision {
            Decision::Approve => AbsenceStatus::Justified,
            Decision::Reject => AbsenceStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateAbsence {
    #[schema(example = "2023-05-17", format = "date", value_type = String)]
    pub date: Option<String>,
    #[schema(example = "sick_leave")]
    pub absence_type: Option<AbsenceType>,
    #[schema(example = "Flu symptoms")]
    pub reason: Option<String>,
    /// Name of an attached supporting document.
    #[schema(example = "medical-note.pdf")]
    pub document: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AbsenceJustification {
    pub id: RequestId,
    pub employee_id: u64,
    pub employee_name: String,
    #[schema(format = "date", value_type = String)]
    pub date: NaiveDate,
    pub absence_type: AbsenceType,
    pub reason: String,
    pub status: AbsenceStatus,
    pub document: Option<String>,
    #[schema(format = "date", value_type = String)]
    pub applied_on: NaiveDate,
    pub reviewed_by: Option<String>,
}

impl TrackedRequest for AbsenceJustification {
    type Draft = CreateAbsence;
    type Status = AbsenceStatus;

    const KIND: &'static str = "absence";

    fn open(
        id: RequestId,
        owner: &Identity,
        draft: CreateAbsence,
        applied_on: NaiveDate,
    ) -> Result<Self, CoreError> {
        let date = parse_date("date", draft.date.as_deref())?;
        let absence_type = draft.absence_type.ok_or(CoreError::missing("absence_type"))?;
        let reason = required_text("reason", draft.reason)?;
        let document = draft
            .document
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(AbsenceJustification {
            id,
            employee_id: owner.id,
            employee_name: owner.name.clone(),
            date,
            absence_type,
            reason,
            status: AbsenceStatus::Pending,
            document,
            applied_on,
            reviewed_by: None,
        })
    }

    fn id(&self) -> RequestId {
        self.id
    }

    fn employee_id(&self) -> u64 {
        self.employee_id
    }

    fn status(&self) -> AbsenceStatus {
        self.status
    }

    fn resolve(&mut self, status: AbsenceStatus, decided_by: &str) {
        self.status = status;
        self.reviewed_by = Some(decided_by.to_string());
    }
}
