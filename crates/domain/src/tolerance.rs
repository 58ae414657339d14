// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permitted survey-error (sai số) calculation.
//!
//! Official survey regulations define, per map scale, the maximum
//! permitted discrepancy for an edge length and for a parcel area. Each
//! rule is a piecewise table: a constant base region followed by linear
//! regions. Edge rules accrue per *whole meter* of excess (floor
//! truncation, matching the published tables); area rules accrue
//! continuously per 10 m² of excess.
//!
//! ## Worked example (scale 1:1.000, edge)
//!
//! ```text
//! D ≤ 3.5 m          → 2.0 cm
//! 3.5 < D ≤ 10 m     → +0.7 cm per whole meter over 3.5
//! 10  < D ≤ 30 m     → +0.3 cm per whole meter over 10
//!
//! value at D = 10:    2.0 + floor(10 − 3.5) × 0.7 = 6.2 cm
//! value at D = 12.35: 6.2 + floor(12.35 − 10) × 0.3 = 6.8 cm
//! ```
//!
//! The value each segment produces at its own upper bound is precomputed
//! once (`base_at_lower` of the following segment); lookups never walk
//! more than their own segment.
//!
//! Bad input never errors: unknown scales and non-positive or non-finite
//! measurements yield a result with no value and an explanatory string.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Multiplier applied when the caller requests the 1.2× allowance.
const MULTIPLIER_12X: f64 = 1.2;

/// The map scales with defined tolerance rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapScale {
    /// 1:200
    S200,
    /// 1:500
    S500,
    /// 1:1.000
    S1000,
    /// 1:2.000
    S2000,
    /// 1:5.000
    S5000,
    /// 1:10.000
    S10000,
}

impl MapScale {
    /// All supported scales, in ascending denominator order.
    pub const ALL: [Self; 6] = [
        Self::S200,
        Self::S500,
        Self::S1000,
        Self::S2000,
        Self::S5000,
        Self::S10000,
    ];

    /// Parses a scale key such as `"1:500"` or `"1:1.000"`.
    ///
    /// Returns `None` for unknown keys; callers surface that as a
    /// "no rule" result rather than an error.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1:200" => Some(Self::S200),
            "1:500" => Some(Self::S500),
            "1:1.000" => Some(Self::S1000),
            "1:2.000" => Some(Self::S2000),
            "1:5.000" => Some(Self::S5000),
            "1:10.000" => Some(Self::S10000),
            _ => None,
        }
    }

    /// Returns the scale key string.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::S200 => "1:200",
            Self::S500 => "1:500",
            Self::S1000 => "1:1.000",
            Self::S2000 => "1:2.000",
            Self::S5000 => "1:5.000",
            Self::S10000 => "1:10.000",
        }
    }

    /// Whether the 1.2× allowance applies to this scale.
    ///
    /// Only 1:1.000 and 1:2.000 honor the request; for every other scale
    /// the request is silently ignored. This mirrors the regulation as
    /// applied by the office and is deliberate policy.
    #[must_use]
    pub const fn qualifies_for_12x(&self) -> bool {
        matches!(self, Self::S1000 | Self::S2000)
    }
}

/// How a segment computes its tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SegmentRule {
    /// Constant base tolerance over the whole segment.
    Base(f64),
    /// Increment per whole meter of excess over the segment's lower bound.
    PerMeter(f64),
    /// Increment per 10 m² of excess over the segment's lower bound,
    /// accrued continuously.
    PerTenSquareMeters(f64),
}

/// A resolved segment of a piecewise rule.
///
/// Segments are contiguous and ordered; the last segment's `upper` is
/// infinite, so every positive input falls into exactly one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    lower: f64,
    upper: f64,
    /// The tolerance the previous segment produces exactly at `lower`.
    base_at_lower: f64,
    rule: SegmentRule,
}

/// Resolves raw `(upper, rule)` pairs into segments with precomputed
/// `base_at_lower` values.
///
/// The carry at each boundary uses the same arithmetic as evaluation
/// (including the whole-meter floor for `PerMeter` rules), so segment
/// chaining reproduces the published tables exactly.
#[allow(clippy::suboptimal_flops)]
fn resolve(defs: &[(f64, SegmentRule)]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::with_capacity(defs.len());
    let mut lower: f64 = 0.0;
    let mut carry: f64 = 0.0;
    for &(upper, rule) in defs {
        let base_at_lower: f64 = carry;
        carry = match rule {
            SegmentRule::Base(base) => base,
            SegmentRule::PerMeter(increment) if upper.is_finite() => {
                base_at_lower + (upper - lower).floor() * increment
            }
            SegmentRule::PerTenSquareMeters(increment) if upper.is_finite() => {
                base_at_lower + ((upper - lower) / 10.0) * increment
            }
            // Last segment; its upper-bound value is never needed.
            SegmentRule::PerMeter(_) | SegmentRule::PerTenSquareMeters(_) => base_at_lower,
        };
        segments.push(Segment {
            lower,
            upper,
            base_at_lower,
            rule,
        });
        lower = upper;
    }
    segments
}

/// Evaluates a resolved piecewise rule at `x`.
#[allow(clippy::suboptimal_flops)]
fn evaluate(segments: &[Segment], x: f64) -> Option<f64> {
    let segment = segments.iter().find(|s| s.upper >= x)?;
    let value = match segment.rule {
        SegmentRule::Base(base) => base,
        SegmentRule::PerMeter(increment) => {
            segment.base_at_lower + (x - segment.lower).floor() * increment
        }
        SegmentRule::PerTenSquareMeters(increment) => {
            segment.base_at_lower + ((x - segment.lower) / 10.0) * increment
        }
    };
    Some(value)
}

type ScaleTable = (MapScale, Vec<Segment>);

/// Edge-length tolerance tables, in centimeters, keyed by map scale.
static EDGE_TABLES: LazyLock<Vec<ScaleTable>> = LazyLock::new(|| {
    use SegmentRule::{Base, PerMeter};
    vec![
        (
            MapScale::S200,
            resolve(&[
                (1.5, Base(0.6)),
                (10.0, PerMeter(0.2)),
                (f64::INFINITY, PerMeter(0.1)),
            ]),
        ),
        (
            MapScale::S500,
            resolve(&[
                (2.5, Base(1.2)),
                (10.0, PerMeter(0.4)),
                (f64::INFINITY, PerMeter(0.2)),
            ]),
        ),
        (
            MapScale::S1000,
            resolve(&[
                (3.5, Base(2.0)),
                (10.0, PerMeter(0.7)),
                (30.0, PerMeter(0.3)),
                (f64::INFINITY, PerMeter(0.2)),
            ]),
        ),
        (
            MapScale::S2000,
            resolve(&[
                (5.0, Base(4.0)),
                (20.0, PerMeter(1.0)),
                (f64::INFINITY, PerMeter(0.5)),
            ]),
        ),
        (
            MapScale::S5000,
            resolve(&[
                (10.0, Base(10.0)),
                (50.0, PerMeter(2.0)),
                (f64::INFINITY, PerMeter(1.0)),
            ]),
        ),
        (
            MapScale::S10000,
            resolve(&[
                (20.0, Base(20.0)),
                (100.0, PerMeter(4.0)),
                (f64::INFINITY, PerMeter(2.0)),
            ]),
        ),
    ]
});

/// Parcel-area tolerance tables, in m², keyed by map scale.
static AREA_TABLES: LazyLock<Vec<ScaleTable>> = LazyLock::new(|| {
    use SegmentRule::{Base, PerTenSquareMeters};
    vec![
        (
            MapScale::S200,
            resolve(&[
                (50.0, Base(0.3)),
                (500.0, PerTenSquareMeters(0.02)),
                (f64::INFINITY, PerTenSquareMeters(0.01)),
            ]),
        ),
        (
            MapScale::S500,
            resolve(&[
                (100.0, Base(1.0)),
                (1000.0, PerTenSquareMeters(0.08)),
                (f64::INFINITY, PerTenSquareMeters(0.04)),
            ]),
        ),
        (
            MapScale::S1000,
            resolve(&[
                (200.0, Base(3.0)),
                (2000.0, PerTenSquareMeters(0.2)),
                (f64::INFINITY, PerTenSquareMeters(0.1)),
            ]),
        ),
        (
            MapScale::S2000,
            resolve(&[
                (500.0, Base(10.0)),
                (5000.0, PerTenSquareMeters(0.5)),
                (f64::INFINITY, PerTenSquareMeters(0.25)),
            ]),
        ),
        (
            MapScale::S5000,
            resolve(&[
                (1000.0, Base(40.0)),
                (10000.0, PerTenSquareMeters(1.5)),
                (f64::INFINITY, PerTenSquareMeters(0.75)),
            ]),
        ),
        (
            MapScale::S10000,
            resolve(&[
                (2000.0, Base(100.0)),
                (20000.0, PerTenSquareMeters(3.0)),
                (f64::INFINITY, PerTenSquareMeters(1.5)),
            ]),
        ),
    ]
});

fn table_for(tables: &[ScaleTable], scale: MapScale) -> Option<&[Segment]> {
    tables
        .iter()
        .find(|(s, _)| *s == scale)
        .map(|(_, segments)| segments.as_slice())
}

/// The outcome of a tolerance lookup.
///
/// `value` is `None` when no rule exists for the requested scale or the
/// measurement is not a positive finite number. `multiplier` records
/// whether the 1.2× allowance was actually applied (1.0 otherwise).
/// `explanation` is derivation text for audit display; nothing
/// load-bearing beyond its existence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceResult {
    /// The permitted discrepancy, if computable.
    pub value: Option<f64>,
    /// The multiplier that was applied (1.0 or 1.2).
    pub multiplier: f64,
    /// Human-readable derivation.
    pub explanation: String,
}

impl ToleranceResult {
    fn no_rule(scale_key: &str) -> Self {
        Self {
            value: None,
            multiplier: 1.0,
            explanation: format!("No tolerance rule is defined for map scale '{scale_key}'"),
        }
    }

    fn invalid_input(what: &str, x: f64) -> Self {
        Self {
            value: None,
            multiplier: 1.0,
            explanation: format!("{what} must be a positive finite number, got {x}"),
        }
    }
}

/// Computes the permitted edge-length discrepancy in centimeters.
///
/// # Arguments
///
/// * `scale_key` - Map scale key, e.g. `"1:1.000"`
/// * `d` - Measured edge length in meters
/// * `apply_12x` - Request the 1.2× allowance; honored only for scales
///   1:1.000 and 1:2.000, silently ignored elsewhere
#[must_use]
pub fn edge_tolerance(scale_key: &str, d: f64, apply_12x: bool) -> ToleranceResult {
    let Some(scale) = MapScale::from_key(scale_key) else {
        return ToleranceResult::no_rule(scale_key);
    };
    if !d.is_finite() || d <= 0.0 {
        return ToleranceResult::invalid_input("Edge length", d);
    }
    let Some(base_value) = table_for(&EDGE_TABLES, scale).and_then(|t| evaluate(t, d)) else {
        return ToleranceResult::no_rule(scale_key);
    };

    let multiplier: f64 = if apply_12x && scale.qualifies_for_12x() {
        MULTIPLIER_12X
    } else {
        1.0
    };
    let value: f64 = base_value * multiplier;
    let explanation: String = if multiplier > 1.0 {
        format!(
            "Scale {}, D = {d} m: permitted edge error {base_value:.2} cm × {multiplier} = {value:.2} cm",
            scale.key()
        )
    } else {
        format!(
            "Scale {}, D = {d} m: permitted edge error {value:.2} cm",
            scale.key()
        )
    };
    ToleranceResult {
        value: Some(value),
        multiplier,
        explanation,
    }
}

/// Computes the permitted parcel-area discrepancy in m².
///
/// # Arguments
///
/// * `scale_key` - Map scale key, e.g. `"1:500"`
/// * `s` - Measured parcel area in m²
#[must_use]
pub fn area_tolerance(scale_key: &str, s: f64) -> ToleranceResult {
    let Some(scale) = MapScale::from_key(scale_key) else {
        return ToleranceResult::no_rule(scale_key);
    };
    if !s.is_finite() || s <= 0.0 {
        return ToleranceResult::invalid_input("Parcel area", s);
    }
    let Some(value) = table_for(&AREA_TABLES, scale).and_then(|t| evaluate(t, s)) else {
        return ToleranceResult::no_rule(scale_key);
    };

    let explanation: String = format!(
        "Scale {}, S = {s} m²: permitted area error {value:.2} m²",
        scale.key()
    );
    ToleranceResult {
        value: Some(value),
        multiplier: 1.0,
        explanation,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_edge_base_region() {
        let result = edge_tolerance("1:1.000", 2.0, false);
        assert_close(result.value.unwrap(), 2.0);
        assert!(!result.explanation.is_empty());
    }

    #[test]
    fn test_edge_worked_example_1_1000() {
        // base at 10 m = 2.0 + floor(10 − 3.5) × 0.7 = 6.2
        // at 12.35 m   = 6.2 + floor(2.35) × 0.3 = 6.8
        let result = edge_tolerance("1:1.000", 12.35, false);
        assert_close(result.value.unwrap(), 6.8);
        assert_close(result.multiplier, 1.0);
    }

    #[test]
    fn test_edge_12x_on_qualifying_scale() {
        let plain = edge_tolerance("1:1.000", 12.35, false);
        let boosted = edge_tolerance("1:1.000", 12.35, true);
        assert_close(boosted.value.unwrap(), plain.value.unwrap() * 1.2);
        assert_close(boosted.value.unwrap(), 8.16);
        assert_close(boosted.multiplier, 1.2);
    }

    #[test]
    fn test_edge_12x_ignored_on_non_qualifying_scale() {
        let plain = edge_tolerance("1:500", 5.0, false);
        let requested = edge_tolerance("1:500", 5.0, true);
        assert_eq!(plain.value, requested.value);
        assert_close(requested.multiplier, 1.0);
    }

    #[test]
    fn test_edge_whole_meter_truncation() {
        // 4.0 and 4.9 fall in the same whole-meter step over 3.5.
        let at_4_0 = edge_tolerance("1:1.000", 4.0, false);
        let at_4_9 = edge_tolerance("1:1.000", 4.9, false);
        assert_eq!(at_4_0.value, at_4_9.value);
        assert_close(at_4_0.value.unwrap(), 2.0);

        // 4.5 → floor(1.0) step, 5.5 → floor(2.0) step.
        let at_4_5 = edge_tolerance("1:1.000", 4.5, false);
        let at_5_5 = edge_tolerance("1:1.000", 5.5, false);
        assert_close(at_4_5.value.unwrap(), 2.7);
        assert_close(at_5_5.value.unwrap(), 3.4);
    }

    #[test]
    fn test_edge_monotonic_per_scale() {
        for scale in MapScale::ALL {
            let mut previous: f64 = 0.0;
            let mut d: f64 = 0.25;
            while d < 250.0 {
                let value = edge_tolerance(scale.key(), d, false).value.unwrap();
                assert!(
                    value >= previous,
                    "edge tolerance not monotonic at {} d={d}",
                    scale.key()
                );
                previous = value;
                d += 0.25;
            }
        }
    }

    #[test]
    fn test_edge_unknown_scale() {
        let result = edge_tolerance("1:25.000", 10.0, false);
        assert_eq!(result.value, None);
        assert!(result.explanation.contains("1:25.000"));
    }

    #[test]
    fn test_edge_invalid_input() {
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let result = edge_tolerance("1:500", bad, false);
            assert_eq!(result.value, None, "d = {bad}");
            assert!(!result.explanation.is_empty());
        }
    }

    #[test]
    fn test_area_base_region() {
        let result = area_tolerance("1:500", 80.0);
        assert_close(result.value.unwrap(), 1.0);
    }

    #[test]
    fn test_area_continuous_accrual() {
        // 1:500: 1.0 + ((105 − 100) / 10) × 0.08 = 1.04 — no floor.
        let result = area_tolerance("1:500", 105.0);
        assert_close(result.value.unwrap(), 1.04);
    }

    #[test]
    fn test_area_segment_boundary_continuity() {
        // Value just past a boundary stays close to the boundary value.
        let at_bound = area_tolerance("1:1.000", 2000.0).value.unwrap();
        let past_bound = area_tolerance("1:1.000", 2000.1).value.unwrap();
        assert!(past_bound >= at_bound);
        assert!(past_bound - at_bound < 0.01);
    }

    #[test]
    fn test_area_monotonic_per_scale() {
        for scale in MapScale::ALL {
            let mut previous: f64 = 0.0;
            let mut s: f64 = 5.0;
            while s < 30000.0 {
                let value = area_tolerance(scale.key(), s).value.unwrap();
                assert!(
                    value >= previous,
                    "area tolerance not monotonic at {} s={s}",
                    scale.key()
                );
                previous = value;
                s += 5.0;
            }
        }
    }

    #[test]
    fn test_area_unknown_scale_and_invalid_input() {
        assert_eq!(area_tolerance("1:123", 100.0).value, None);
        assert_eq!(area_tolerance("1:500", -1.0).value, None);
        assert_eq!(area_tolerance("1:500", f64::NAN).value, None);
    }

    #[test]
    fn test_scale_key_round_trip() {
        for scale in MapScale::ALL {
            assert_eq!(MapScale::from_key(scale.key()), Some(scale));
        }
        assert_eq!(MapScale::from_key("1:1000"), None);
    }
}
