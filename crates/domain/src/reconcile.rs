// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Before/after area reconciliation for parcel detail ledgers.
//!
//! Subdivision and boundary-correction forms list detail rows that each
//! carry an area before and after the change. The totals must agree; a
//! fixed 0.1 m² epsilon absorbs rounding noise from hand-entered values.

use serde::{Deserialize, Serialize};

/// Mismatch threshold in m². Fixed by office practice, not configurable.
pub const AREA_EPSILON: f64 = 0.1;

/// One detail row's contribution to the reconciliation.
///
/// Missing values contribute zero; a row with neither side filled in is
/// simply ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParcelAreaRow {
    /// Area before the change, m².
    pub before: Option<f64>,
    /// Area after the change, m².
    pub after: Option<f64>,
}

impl ParcelAreaRow {
    /// Creates a new `ParcelAreaRow`.
    #[must_use]
    pub const fn new(before: Option<f64>, after: Option<f64>) -> Self {
        Self { before, after }
    }
}

/// Result of an area reconciliation.
///
/// Totals and difference are rounded to 2 decimal places for display and
/// assertions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaReconciliation {
    /// Sum of all "before" areas, m².
    pub total_before: f64,
    /// Sum of all "after" areas, m².
    pub total_after: f64,
    /// Absolute difference between the totals, m².
    pub diff: f64,
    /// Whether the difference exceeds [`AREA_EPSILON`].
    pub mismatch: bool,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Reconciles before/after totals over a list of detail rows.
///
/// Zero rows, or rows with no numeric data, contribute nothing and are
/// not an error. When no row carries any "after" value there is nothing
/// to compare, so no mismatch is reported. Summation is commutative;
/// row order never changes the result.
#[must_use]
pub fn reconcile_areas(rows: &[ParcelAreaRow]) -> AreaReconciliation {
    let total_before: f64 = rows.iter().filter_map(|r| r.before).sum();
    let total_after: f64 = rows.iter().filter_map(|r| r.after).sum();
    let has_after: bool = rows.iter().any(|r| r.after.is_some());

    let diff: f64 = round2((total_before - total_after).abs());
    AreaReconciliation {
        total_before: round2(total_before),
        total_after: round2(total_after),
        diff,
        mismatch: has_after && diff > AREA_EPSILON,
    }
}

/// Signed-delta variant: checks a list of increase/decrease deltas
/// against a single baseline area.
///
/// The "after" total is the baseline plus the sum of the deltas; the
/// mismatch rule is the same as [`reconcile_areas`]. A missing baseline
/// means there is nothing to compare, so no mismatch is reported.
#[must_use]
pub fn reconcile_signed(baseline: Option<f64>, deltas: &[f64]) -> AreaReconciliation {
    let total_before: f64 = baseline.unwrap_or(0.0);
    let net: f64 = deltas.iter().sum();
    let total_after: f64 = total_before + net;

    let diff: f64 = round2(net.abs());
    AreaReconciliation {
        total_before: round2(total_before),
        total_after: round2(total_after),
        diff,
        mismatch: baseline.is_some() && diff > AREA_EPSILON,
    }
}
