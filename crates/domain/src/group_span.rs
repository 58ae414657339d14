// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Merged-cell span resolution for ledger tables.
//!
//! Subdivision and boundary-correction ledgers group detail rows by a
//! shared contract/file number. Shared columns render once per group
//! with a vertical span; sequence numbers count groups, not rows. Rows
//! with an empty grouping key never merge — each is its own group.
//!
//! The resolver expects its input already sorted so that equal non-empty
//! keys are contiguous; [`sort_for_grouping`] produces that order.

/// Precomputed spans and group ordinals for one sorted row list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpans {
    spans: Vec<usize>,
    ordinals: Vec<usize>,
}

impl GroupSpans {
    /// Resolves spans and ordinals over `rows`.
    ///
    /// `key_fn` extracts the grouping key from a row. Rows sharing a
    /// non-empty key must already be contiguous; rows with an empty key
    /// are singleton groups wherever they appear.
    #[must_use]
    pub fn resolve<T, F>(rows: &[T], key_fn: F) -> Self
    where
        F: Fn(&T) -> &str,
    {
        let keys: Vec<&str> = rows.iter().map(|row| key_fn(row)).collect();
        let n: usize = keys.len();
        let mut spans: Vec<usize> = vec![0; n];
        let mut ordinals: Vec<usize> = vec![0; n];

        let mut i: usize = 0;
        let mut ordinal: usize = 0;
        while i < n {
            ordinal += 1;
            let run: usize = if keys[i].is_empty() {
                1
            } else {
                keys[i..].iter().take_while(|k| **k == keys[i]).count()
            };
            spans[i] = run;
            for slot in &mut ordinals[i..i + run] {
                *slot = ordinal;
            }
            // spans for absorbed rows stay 0
            i += run;
        }

        Self { spans, ordinals }
    }

    /// Number of rows covered by the cell starting at row `i`.
    ///
    /// `0` means the row is absorbed into a span that started earlier
    /// and no cell should be rendered. Out-of-range indices return 0.
    #[must_use]
    pub fn span_at(&self, i: usize) -> usize {
        self.spans.get(i).copied().unwrap_or(0)
    }

    /// 1-based ordinal of the group containing row `i`.
    ///
    /// Counts groups, not rows: a merged run shares one ordinal.
    /// Out-of-range indices return 0.
    #[must_use]
    pub fn ordinal_at(&self, i: usize) -> usize {
        self.ordinals.get(i).copied().unwrap_or(0)
    }

    /// Number of rows the spans were resolved over.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the resolved list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.ordinals.last().copied().unwrap_or(0)
    }
}

/// Returns a copy of `rows` sorted for grouping: lexicographically by
/// key, with empty-key rows after all keyed rows.
///
/// The sort is stable, so rows within a group and the relative order of
/// empty-key rows are preserved. The input is never mutated.
#[must_use]
pub fn sort_for_grouping<T, F>(rows: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let mut sorted: Vec<T> = rows.to_vec();
    sorted.sort_by(|a, b| {
        let (ka, kb) = (key_fn(a), key_fn(b));
        ka.is_empty().cmp(&kb.is_empty()).then_with(|| ka.cmp(kb))
    });
    sorted
}
