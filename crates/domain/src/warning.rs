// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deadline warning classification and role-scoped visibility.
//!
//! Warnings are **computed**, not stored: both predicates are pure
//! functions of a record and an explicit "today". The visibility gate is
//! a flat mapping over the closed [`Role`] set and denies by default.

use crate::types::{Employee, Record, Role, UserContext};
use chrono::NaiveDate;

/// Number of days before the deadline at which a record counts as
/// approaching it.
pub const APPROACHING_WINDOW_DAYS: i64 = 3;

/// Returns whether the record's deadline has passed.
///
/// Handover and Withdrawn records are never overdue regardless of their
/// deadline; a record without a deadline is never overdue. Dates are
/// compared at day granularity.
#[must_use]
pub fn is_overdue(record: &Record, today: NaiveDate) -> bool {
    if record.status.excludes_warnings() {
        return false;
    }
    record.deadline.is_some_and(|deadline| deadline < today)
}

/// Returns whether the record's deadline is within the approaching
/// window (0 to [`APPROACHING_WINDOW_DAYS`] days away, inclusive).
///
/// Uses the same status exclusion as [`is_overdue`]; a record that is
/// already overdue is not also approaching.
#[must_use]
pub fn is_approaching(record: &Record, today: NaiveDate) -> bool {
    if record.status.excludes_warnings() {
        return false;
    }
    record.deadline.is_some_and(|deadline| {
        let days_left = (deadline - today).num_days();
        (0..=APPROACHING_WINDOW_DAYS).contains(&days_left)
    })
}

/// Returns whether `user` is permitted to see deadline warnings on
/// `record`.
///
/// - `OneDoor` never sees warnings.
/// - `Admin` and `SubAdmin` always see them.
/// - `Employee` sees warnings only on records assigned to them.
/// - `TeamLeader` sees warnings on records assigned to them directly,
///   or whose ward contains one of their managed wards as a substring
///   (a leader managing "Chơn Thành" covers "phường Chơn Thành").
///
/// A `TeamLeader` or `Employee` without a linked employee id is denied.
#[must_use]
pub fn can_see_warning(record: &Record, user: &UserContext, employees: &[Employee]) -> bool {
    match user.role {
        Role::OneDoor => false,
        Role::Admin | Role::SubAdmin => true,
        Role::Employee => match (&record.assigned_to, &user.employee_id) {
            (Some(assigned), Some(own)) => assigned == own,
            _ => false,
        },
        Role::TeamLeader => user.employee_id.as_ref().is_some_and(|own_id| {
            record.assigned_to.as_ref() == Some(own_id)
                || employees
                    .iter()
                    .find(|e| &e.id == own_id)
                    .is_some_and(|leader| {
                        leader
                            .managed_wards
                            .iter()
                            .any(|ward| !ward.is_empty() && record.ward.contains(ward.as_str()))
                    })
        }),
    }
}
