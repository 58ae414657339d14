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

mod error;
mod group_span;
mod reconcile;
mod search;
mod tolerance;
mod types;
mod warning;

pub use error::DomainError;
pub use group_span::{GroupSpans, sort_for_grouping};
pub use reconcile::{
    AREA_EPSILON, AreaReconciliation, ParcelAreaRow, reconcile_areas, reconcile_signed,
};
pub use search::{contains_folded, fold_diacritics};
pub use tolerance::{MapScale, ToleranceResult, area_tolerance, edge_tolerance};
pub use types::{Employee, Record, RecordStatus, Role, UserContext};
pub use warning::{APPROACHING_WINDOW_DAYS, can_see_warning, is_approaching, is_overdue};
