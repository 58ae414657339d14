// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The record filter/sort/paginate pipeline.
//!
//! [`compute_filtered_view`] is a pure function over a snapshot of the
//! record collection and one [`FilterState`]: identical inputs produce
//! identical output, and the input slice is never mutated. Stages run
//! in a fixed order — dedupe, view partition, free-text search, field
//! filters, date filters, warning gate, sort, paginate.

use crate::partition;
use crate::state::{AssigneeFilter, FilterState, RecordView, SortDirection, SortKey, WarningKind};
use chrono::NaiveDate;
use landreg_domain::{
    Employee, Record, UserContext, can_see_warning, contains_folded, is_approaching, is_overdue,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Overdue/approaching totals over the whole record collection.
///
/// Computed over every record the user is allowed to see warnings on,
/// regardless of the current view, excluding handed-over and withdrawn
/// records. Zero when no user is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WarningCounts {
    /// Records past their deadline.
    pub overdue: usize,
    /// Records within the approaching window.
    pub approaching: usize,
}

/// The derived view handed back to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredView {
    /// The full filtered and sorted list, before pagination.
    pub filtered: Vec<Record>,
    /// The current page slice.
    pub page: Vec<Record>,
    /// Total page count (at least 1, even for an empty list).
    pub total_pages: usize,
    /// Collection-wide warning totals.
    pub warning_counts: WarningCounts,
}

/// Computes the filtered, sorted, paginated view of `records`.
///
/// # Arguments
///
/// * `records` - Snapshot of the record collection; duplicates by id are
///   tolerated (last occurrence wins)
/// * `state` - The filter state
/// * `user` - The signed-in user, if any; gates the warning filter and
///   the warning counts
/// * `employees` - Roster used to resolve team leaders' managed wards
/// * `today` - The day to classify deadlines against
#[must_use]
pub fn compute_filtered_view(
    records: &[Record],
    state: &FilterState,
    user: Option<&UserContext>,
    employees: &[Employee],
    today: NaiveDate,
) -> FilteredView {
    let deduped: Vec<Record> = dedupe_by_id(records);
    let warning_counts: WarningCounts = count_warnings(&deduped, user, employees, today);

    let mut filtered: Vec<Record> = deduped;
    filtered.retain(|record| partition::matches_view(record, &state.view));
    tracing::debug!(rows = filtered.len(), view = ?state.view, "view partition applied");

    apply_search(&mut filtered, &state.search);
    apply_field_filters(&mut filtered, state);
    apply_date_filters(&mut filtered, state);
    apply_warning_filter(&mut filtered, state, user, employees, today);
    tracing::debug!(rows = filtered.len(), "filters applied");

    if let Some(key) = state.sort {
        filtered.sort_by(|a, b| compare_records(a, b, key, state.direction));
    }

    let (page, total_pages) = paginate(&filtered, state.page, state.page_size);
    FilteredView {
        filtered,
        page,
        total_pages,
        warning_counts,
    }
}

/// Deduplicates by id, keeping the position of the first occurrence and
/// the data of the last.
fn dedupe_by_id(records: &[Record]) -> Vec<Record> {
    let mut slots: HashMap<u64, usize> = HashMap::with_capacity(records.len());
    let mut deduped: Vec<Record> = Vec::with_capacity(records.len());
    for record in records {
        if let Some(&slot) = slots.get(&record.id) {
            deduped[slot] = record.clone();
        } else {
            slots.insert(record.id, deduped.len());
            deduped.push(record.clone());
        }
    }
    deduped
}

fn count_warnings(
    records: &[Record],
    user: Option<&UserContext>,
    employees: &[Employee],
    today: NaiveDate,
) -> WarningCounts {
    let Some(user) = user else {
        return WarningCounts::default();
    };
    let mut counts = WarningCounts::default();
    for record in records {
        if record.status.excludes_warnings() || !can_see_warning(record, user, employees) {
            continue;
        }
        if is_overdue(record, today) {
            counts.overdue += 1;
        } else if is_approaching(record, today) {
            counts.approaching += 1;
        }
    }
    counts
}

fn apply_search(filtered: &mut Vec<Record>, search: &str) {
    if search.is_empty() {
        return;
    }
    filtered.retain(|record| {
        contains_folded(&record.code, search)
            || contains_folded(&record.customer_name, search)
            || contains_folded(&record.ward, search)
            || record.phone.contains(search)
    });
}

fn apply_field_filters(filtered: &mut Vec<Record>, state: &FilterState) {
    if !state.ward.is_empty() {
        filtered.retain(|record| contains_folded(&record.ward, &state.ward));
    }

    // The handover tabs fix their own status; the generic filter would
    // only fight them.
    if !state.view.is_handover()
        && let Some(status) = state.status
    {
        filtered.retain(|record| record.status == status);
    }

    // Everything in the assignment view is assignable; the filter is
    // meaningless there.
    if state.view != RecordView::Assignment {
        match &state.assignee {
            AssigneeFilter::Any => {}
            AssigneeFilter::Unassigned => filtered.retain(|record| record.assigned_to.is_none()),
            AssigneeFilter::Id(id) => {
                filtered.retain(|record| record.assigned_to.as_deref() == Some(id.as_str()));
            }
        }
    }
}

fn apply_date_filters(filtered: &mut Vec<Record>, state: &FilterState) {
    if state.view.is_handover() {
        return;
    }
    if let Some(day) = state.received_on {
        filtered.retain(|record| record.received_date == Some(day));
        return;
    }
    if state.received_from.is_none() && state.received_to.is_none() {
        return;
    }
    filtered.retain(|record| {
        let Some(received) = record.received_date else {
            return false;
        };
        state.received_from.is_none_or(|lower| received >= lower)
            && state.received_to.is_none_or(|upper| received <= upper)
    });
}

fn apply_warning_filter(
    filtered: &mut Vec<Record>,
    state: &FilterState,
    user: Option<&UserContext>,
    employees: &[Employee],
    today: NaiveDate,
) {
    let (Some(kind), Some(user)) = (state.warning, user) else {
        return;
    };
    filtered.retain(|record| {
        let matches = match kind {
            WarningKind::Overdue => is_overdue(record, today),
            WarningKind::Approaching => is_approaching(record, today),
        };
        matches && can_see_warning(record, user, employees)
    });
}

/// A comparable view of one sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue<'a> {
    Text(&'a str),
    Date(NaiveDate),
}

fn sort_value<'a>(record: &'a Record, key: SortKey) -> Option<SortValue<'a>> {
    let non_empty = |s: &'a str| (!s.is_empty()).then_some(SortValue::Text(s));
    match key {
        SortKey::Code => non_empty(&record.code),
        SortKey::CustomerName => non_empty(&record.customer_name),
        SortKey::Ward => non_empty(&record.ward),
        SortKey::ReceivedDate => record.received_date.map(SortValue::Date),
        SortKey::Deadline => record.deadline.map(SortValue::Date),
    }
}

/// Compares two records on `key`.
///
/// A record missing the sort field always sorts after one that has it,
/// for both directions — the direction flips only the comparison of two
/// present values. Deliberate: the UI always shows blank cells at the
/// bottom.
fn compare_records(a: &Record, b: &Record, key: SortKey, direction: SortDirection) -> Ordering {
    match (sort_value(a, key), sort_value(b, key)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ordering = x.cmp(&y);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

fn paginate(filtered: &[Record], page: usize, page_size: usize) -> (Vec<Record>, usize) {
    let page_size: usize = page_size.max(1);
    let total_pages: usize = filtered.len().div_ceil(page_size).max(1);
    let page: usize = page.clamp(1, total_pages);
    let start: usize = (page - 1) * page_size;
    let end: usize = (start + page_size).min(filtered.len());
    (filtered[start..end].to_vec(), total_pages)
}
