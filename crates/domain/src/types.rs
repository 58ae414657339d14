// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the workflow state of a record file.
///
/// The lifecycle order is:
/// Received → `PendingSign` → Signed → Handover/Withdrawn → Returned.
///
/// Transitions are advisory: the view engine assumes them when building
/// status partitions but never enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RecordStatus {
    /// Intake complete, awaiting assignment to a surveyor.
    #[default]
    Received,
    /// Survey finished, awaiting leadership sign-off.
    PendingSign,
    /// Signed off, ready for handover to the one-stop counter.
    Signed,
    /// Formally transferred to the one-stop counter.
    Handover,
    /// Withdrawn by the customer before handover.
    Withdrawn,
    /// Result returned to the customer.
    Returned,
}

impl FromStr for RecordStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECEIVED" => Ok(Self::Received),
            "PENDING_SIGN" => Ok(Self::PendingSign),
            "SIGNED" => Ok(Self::Signed),
            "HANDOVER" => Ok(Self::Handover),
            "WITHDRAWN" => Ok(Self::Withdrawn),
            "RETURNED" => Ok(Self::Returned),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RecordStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "RECEIVED",
            Self::PendingSign => "PENDING_SIGN",
            Self::Signed => "SIGNED",
            Self::Handover => "HANDOVER",
            Self::Withdrawn => "WITHDRAWN",
            Self::Returned => "RETURNED",
        }
    }

    /// Checks if a transition from this status to another follows the
    /// lifecycle order.
    ///
    /// Valid transitions are:
    /// - Received → `PendingSign`
    /// - `PendingSign` → Signed
    /// - Signed → Handover or Withdrawn
    /// - Handover → Returned
    /// - Withdrawn → Returned
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Received, Self::PendingSign)
                | (Self::PendingSign, Self::Signed)
                | (Self::Signed, Self::Handover | Self::Withdrawn)
                | (Self::Handover | Self::Withdrawn, Self::Returned)
        )
    }

    /// Returns whether this status is terminal for warning purposes.
    ///
    /// Handover and Withdrawn records are excluded from overdue and
    /// approaching-deadline classification.
    #[must_use]
    pub const fn excludes_warnings(&self) -> bool {
        matches!(self, Self::Handover | Self::Withdrawn)
    }
}

/// Represents the role of the signed-in user.
///
/// Roles form a closed set; visibility rules deny by default for anything
/// that fails to parse into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full access, sees every warning.
    Admin,
    /// Deputy administrator, same warning visibility as Admin.
    SubAdmin,
    /// Sees warnings for records they own or in wards they manage.
    TeamLeader,
    /// Sees warnings only for records assigned to them.
    Employee,
    /// One-stop counter staff, never sees deadline warnings.
    OneDoor,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "SUBADMIN" => Ok(Self::SubAdmin),
            "TEAM_LEADER" => Ok(Self::TeamLeader),
            "EMPLOYEE" => Ok(Self::Employee),
            "ONEDOOR" => Ok(Self::OneDoor),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::SubAdmin => "SUBADMIN",
            Self::TeamLeader => "TEAM_LEADER",
            Self::Employee => "EMPLOYEE",
            Self::OneDoor => "ONEDOOR",
        }
    }
}

/// A case file tracked by the office.
///
/// Records are created on intake and mutated on every workflow
/// transition by the surrounding application; this crate only ever reads
/// them. Export never deletes a record, it only tags `export_batch` and
/// `export_date`.
///
/// Day-granularity lifecycle dates are `NaiveDate`; `completed_date` and
/// `export_date` are full ISO 8601 timestamps kept as strings because the
/// handover-history view matches them by day prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier.
    pub id: u64,
    /// Human-facing record code (e.g. receipt number).
    pub code: String,
    /// Name of the requesting customer.
    pub customer_name: String,
    /// Customer phone number.
    pub phone: String,
    /// Ward (xã/phường) the surveyed parcel lies in.
    pub ward: String,
    /// Land plot number.
    pub land_plot: String,
    /// Map sheet number.
    pub map_sheet: String,
    /// Parcel area in m².
    pub area: Option<f64>,
    /// Date the request was received.
    pub received_date: Option<NaiveDate>,
    /// Processing deadline.
    pub deadline: Option<NaiveDate>,
    /// Date the record was assigned to a surveyor.
    pub assigned_date: Option<NaiveDate>,
    /// Completion timestamp (ISO 8601).
    pub completed_date: Option<String>,
    /// Export timestamp (ISO 8601), set when the record joins an export batch.
    pub export_date: Option<String>,
    /// Date the result was returned to the customer.
    pub result_returned_date: Option<NaiveDate>,
    /// Current workflow status.
    pub status: RecordStatus,
    /// Employee id of the assigned surveyor.
    pub assigned_to: Option<String>,
    /// Export batch identifier, if the record has been exported.
    pub export_batch: Option<String>,
    /// Whether the cadastral map needs correcting for this parcel.
    pub needs_map_correction: bool,
}

/// An employee of the office.
///
/// Used only for warning-visibility scoping; never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Wards this employee is responsible for as a team leader.
    pub managed_wards: Vec<String>,
}

impl Employee {
    /// Creates a new `Employee`.
    #[must_use]
    pub const fn new(id: String, name: String, managed_wards: Vec<String>) -> Self {
        Self {
            id,
            name,
            managed_wards,
        }
    }
}

/// The signed-in user, as seen by the visibility gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    /// The user's role.
    pub role: Role,
    /// Employee id this user is linked to, for `TeamLeader` and
    /// `Employee` roles.
    pub employee_id: Option<String>,
}

impl UserContext {
    /// Creates a new `UserContext`.
    #[must_use]
    pub const fn new(role: Role, employee_id: Option<String>) -> Self {
        Self { role, employee_id }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            RecordStatus::Received,
            RecordStatus::PendingSign,
            RecordStatus::Signed,
            RecordStatus::Handover,
            RecordStatus::Withdrawn,
            RecordStatus::Returned,
        ] {
            assert_eq!(status.as_str().parse::<RecordStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        let err = "SHREDDED".parse::<RecordStatus>().unwrap_err();
        assert_eq!(err, DomainError::InvalidStatus(String::from("SHREDDED")));
    }

    #[test]
    fn test_lifecycle_transitions() {
        assert!(RecordStatus::Received.can_transition_to(RecordStatus::PendingSign));
        assert!(RecordStatus::PendingSign.can_transition_to(RecordStatus::Signed));
        assert!(RecordStatus::Signed.can_transition_to(RecordStatus::Handover));
        assert!(RecordStatus::Signed.can_transition_to(RecordStatus::Withdrawn));
        assert!(RecordStatus::Handover.can_transition_to(RecordStatus::Returned));
        assert!(RecordStatus::Withdrawn.can_transition_to(RecordStatus::Returned));

        assert!(!RecordStatus::Received.can_transition_to(RecordStatus::Signed));
        assert!(!RecordStatus::Returned.can_transition_to(RecordStatus::Received));
        assert!(!RecordStatus::Handover.can_transition_to(RecordStatus::Withdrawn));
    }

    #[test]
    fn test_warning_exclusion_statuses() {
        assert!(RecordStatus::Handover.excludes_warnings());
        assert!(RecordStatus::Withdrawn.excludes_warnings());
        assert!(!RecordStatus::Received.excludes_warnings());
        assert!(!RecordStatus::Returned.excludes_warnings());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [
            Role::Admin,
            Role::SubAdmin,
            Role::TeamLeader,
            Role::Employee,
            Role::OneDoor,
        ] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        let err = "INTERN".parse::<Role>().unwrap_err();
        assert_eq!(err, DomainError::InvalidRole(String::from("INTERN")));
    }
}
