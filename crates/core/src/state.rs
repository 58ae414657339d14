// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use landreg_domain::RecordStatus;
use serde::{Deserialize, Serialize};

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sub-mode of the handover view.
///
/// Each tab fixes its own status partition, which is why the generic
/// status filter is suppressed inside the handover view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HandoverTab {
    /// Records ready to hand over now: signed, or withdrawn but not yet
    /// exported.
    #[default]
    Today,
    /// Records whose result was returned, restricted to an inclusive
    /// date range over the return date.
    Returned {
        /// Lower bound (inclusive); `None` = unbounded.
        from: Option<NaiveDate>,
        /// Upper bound (inclusive); `None` = unbounded.
        to: Option<NaiveDate>,
    },
    /// Past handovers: handed over, or withdrawn after export. A set
    /// date matches export timestamps by day prefix.
    History {
        /// The day to match, if any.
        date: Option<NaiveDate>,
    },
}

/// The workflow view a screen is showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RecordView {
    /// No status restriction.
    #[default]
    All,
    /// Records awaiting leadership sign-off.
    PendingSignature,
    /// The handover screen, in one of its tabs.
    Handover(HandoverTab),
    /// Newly received records awaiting assignment.
    Assignment,
}

impl RecordView {
    /// Whether this is any tab of the handover view.
    #[must_use]
    pub const fn is_handover(&self) -> bool {
        matches!(self, Self::Handover(_))
    }
}

/// Assignee filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AssigneeFilter {
    /// No restriction.
    #[default]
    Any,
    /// Only records with no assigned surveyor.
    Unassigned,
    /// Only records assigned to this employee id.
    Id(String),
}

/// Which deadline warning category to filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Deadline already passed.
    Overdue,
    /// Deadline within the approaching window.
    Approaching,
}

/// The record field a view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Record code.
    Code,
    /// Customer name.
    CustomerName,
    /// Ward.
    Ward,
    /// Date received.
    ReceivedDate,
    /// Processing deadline.
    Deadline,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first. Records missing the sort field still sort last.
    Descending,
}

/// Immutable filter state for one view computation.
///
/// Every input the engine consults lives here; the engine itself is a
/// pure function of `(records, state, user, today)`. The `with_*`
/// setters return a new state and reset `page` to 1, encoding the rule
/// that changing any filter, sort, or view input jumps back to the
/// first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// The workflow view.
    pub view: RecordView,
    /// Free-text search (diacritic-insensitive over code, customer
    /// name, and ward; literal over phone).
    pub search: String,
    /// Ward filter (diacritic-insensitive substring); empty = off.
    pub ward: String,
    /// Status filter; ignored inside the handover view.
    pub status: Option<RecordStatus>,
    /// Assignee filter; ignored in the assignment view.
    pub assignee: AssigneeFilter,
    /// Warning-category filter; requires a signed-in user.
    pub warning: Option<WarningKind>,
    /// Exact received-date filter; takes precedence over the range.
    pub received_on: Option<NaiveDate>,
    /// Received-date range lower bound (inclusive).
    pub received_from: Option<NaiveDate>,
    /// Received-date range upper bound (inclusive).
    pub received_to: Option<NaiveDate>,
    /// Sort key; `None` keeps input order.
    pub sort: Option<SortKey>,
    /// Sort direction.
    pub direction: SortDirection,
    /// Current page, 1-based. Clamped into range by the engine.
    pub page: usize,
    /// Page size.
    pub page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(RecordView::All)
    }
}

impl FilterState {
    /// Creates an unfiltered state for `view`, on page 1.
    #[must_use]
    pub const fn new(view: RecordView) -> Self {
        Self {
            view,
            search: String::new(),
            ward: String::new(),
            status: None,
            assignee: AssigneeFilter::Any,
            warning: None,
            received_on: None,
            received_from: None,
            received_to: None,
            sort: None,
            direction: SortDirection::Ascending,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Switches the view and resets to page 1.
    #[must_use]
    pub fn with_view(mut self, view: RecordView) -> Self {
        self.view = view;
        self.page = 1;
        self
    }

    /// Sets the free-text search and resets to page 1.
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = String::from(search);
        self.page = 1;
        self
    }

    /// Sets the ward filter and resets to page 1.
    #[must_use]
    pub fn with_ward(mut self, ward: &str) -> Self {
        self.ward = String::from(ward);
        self.page = 1;
        self
    }

    /// Sets the status filter and resets to page 1.
    #[must_use]
    pub fn with_status(mut self, status: Option<RecordStatus>) -> Self {
        self.status = status;
        self.page = 1;
        self
    }

    /// Sets the assignee filter and resets to page 1.
    #[must_use]
    pub fn with_assignee(mut self, assignee: AssigneeFilter) -> Self {
        self.assignee = assignee;
        self.page = 1;
        self
    }

    /// Sets the warning filter and resets to page 1.
    #[must_use]
    pub fn with_warning(mut self, warning: Option<WarningKind>) -> Self {
        self.warning = warning;
        self.page = 1;
        self
    }

    /// Sets the exact received-date filter and resets to page 1.
    #[must_use]
    pub fn with_received_on(mut self, date: Option<NaiveDate>) -> Self {
        self.received_on = date;
        self.page = 1;
        self
    }

    /// Sets the received-date range and resets to page 1.
    #[must_use]
    pub fn with_received_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.received_from = from;
        self.received_to = to;
        self.page = 1;
        self
    }

    /// Sets the sort key and direction and resets to page 1.
    #[must_use]
    pub fn with_sort(mut self, sort: Option<SortKey>, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self.page = 1;
        self
    }

    /// Moves to a page. Does not reset anything.
    #[must_use]
    pub const fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Changes the page size and resets to page 1.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self.page = 1;
        self
    }
}
