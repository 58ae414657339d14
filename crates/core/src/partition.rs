// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! View partition predicates.
//!
//! Each view selects the slice of the workflow it is about; the filter
//! pipeline applies the partition before any other filter. Handover
//! tabs carry their own date restrictions because the original intake
//! screens bake them into the tab, not the shared date filter.

use crate::state::{HandoverTab, RecordView};
use landreg_domain::{Record, RecordStatus};

/// Returns whether `record` belongs to `view`.
pub(crate) fn matches_view(record: &Record, view: &RecordView) -> bool {
    match view {
        RecordView::All => true,
        RecordView::PendingSignature => record.status == RecordStatus::PendingSign,
        RecordView::Assignment => record.status == RecordStatus::Received,
        RecordView::Handover(tab) => matches_handover_tab(record, tab),
    }
}

fn matches_handover_tab(record: &Record, tab: &HandoverTab) -> bool {
    match tab {
        HandoverTab::Today => {
            record.status == RecordStatus::Signed
                || (record.status == RecordStatus::Withdrawn && record.export_batch.is_none())
        }
        HandoverTab::Returned { from, to } => {
            if record.status != RecordStatus::Returned {
                return false;
            }
            if from.is_none() && to.is_none() {
                return true;
            }
            // A record without a return date never matches a bounded range.
            record.result_returned_date.is_some_and(|returned| {
                from.is_none_or(|lower| returned >= lower)
                    && to.is_none_or(|upper| returned <= upper)
            })
        }
        HandoverTab::History { date } => {
            let in_history = record.status == RecordStatus::Handover
                || (record.status == RecordStatus::Withdrawn && record.export_batch.is_some());
            if !in_history {
                return false;
            }
            date.is_none_or(|day| {
                let prefix: String = day.format("%Y-%m-%d").to_string();
                record
                    .export_date
                    .as_deref()
                    .or_else(|| record.completed_date.as_deref())
                    .is_some_and(|stamp| stamp.starts_with(&prefix))
            })
        }
    }
}
