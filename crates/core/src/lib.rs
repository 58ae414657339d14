// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod engine;
mod partition;
mod state;

#[cfg(test)]
mod tests;

pub use engine::{FilteredView, WarningCounts, compute_filtered_view};
pub use state::{
    AssigneeFilter, DEFAULT_PAGE_SIZE, FilterState, HandoverTab, RecordView, SortDirection,
    SortKey, WarningKind,
};
