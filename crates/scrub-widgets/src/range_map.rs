#![forbid(unsafe_code)]

//! Bidirectional mapping between domain values and track positions.
//!
//! A [`RangeMap`] captures a domain range — for example the first and last of
//! an ordered series of timestamps — and converts between domain values and
//! percent positions along a slider track. Both directions clamp instead of
//! failing: out-of-range input is legal and maps to the nearest extreme.
//!
//! # Invariants
//!
//! 1. Every position produced is within `[0.0, 100.0]`.
//! 2. A degenerate range (`min == max`) returns constants, never NaN:
//!    `value_to_position` maps everything to `0.0` and `position_to_value`
//!    to `min`.
//! 3. Conversions are pure: identical inputs always yield identical outputs.

use web_time::SystemTime;

/// Milliseconds in one day, the spacing of generated fallback samples.
const ONE_DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Number of fallback samples generated when the host supplies no data.
const DEFAULT_SAMPLE_COUNT: usize = 5;

/// An excluded sub-interval of position space, rendered as a break marker.
///
/// Gaps never overlap. The default conversions ignore them; they exist so the
/// renderer can draw break elements and style the ones the thumb has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    pub start: f64,
    pub end: f64,
}

/// A position-space sub-interval that carries data.
///
/// With no gaps there is a single span covering the whole track. Reserved
/// for a gap-aware mapper that would redistribute position space across
/// spans; the default conversions do not consult it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

/// Value↔position converter over a bounded domain.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeMap {
    min: f64,
    max: f64,
    gaps: Vec<Gap>,
    spans: Vec<Span>,
}

impl RangeMap {
    /// Build from an ordered sequence of reference values.
    ///
    /// `min` is the first element and `max` the last. An empty sequence
    /// falls back to [`sample_timestamps`] ending at the current wall-clock
    /// time, so the slider stays usable without host data.
    pub fn from_samples(samples: &[f64]) -> Self {
        Self::from_samples_at(samples, now_ms())
    }

    /// Clock-injected variant of [`RangeMap::from_samples`].
    pub fn from_samples_at(samples: &[f64], now_ms: f64) -> Self {
        if samples.is_empty() {
            let fallback = sample_timestamps(DEFAULT_SAMPLE_COUNT, now_ms);
            return Self::from_bounds(fallback[0], fallback[fallback.len() - 1]);
        }
        Self::from_bounds(samples[0], samples[samples.len() - 1])
    }

    /// Build directly from range bounds.
    pub fn from_bounds(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            gaps: Vec::new(),
            spans: vec![Span {
                start: 0.0,
                end: 100.0,
            }],
        }
    }

    /// Attach break markers. Markers are visual only and do not affect the
    /// conversions.
    #[must_use]
    pub fn with_gaps(mut self, gaps: Vec<Gap>) -> Self {
        self.gaps = gaps;
        self
    }

    /// Lower bound of the domain.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the domain.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Break markers attached to this map.
    pub fn gaps(&self) -> &[Gap] {
        &self.gaps
    }

    /// Data-carrying position spans.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Convert a domain value to a percent position.
    ///
    /// Values at or beyond the bounds clamp to `0.0`/`100.0`. A degenerate
    /// range maps every value to `0.0`.
    pub fn value_to_position(&self, value: f64) -> f64 {
        if self.min >= self.max {
            return 0.0;
        }
        if value >= self.max {
            return 100.0;
        }
        if value <= self.min {
            return 0.0;
        }
        (value - self.min) / (self.max - self.min) * 100.0
    }

    /// Convert a percent position back to a domain value.
    ///
    /// Positions at or beyond `0`/`100` clamp to `min`/`max`. A degenerate
    /// range maps every position to `min`.
    pub fn position_to_value(&self, position: f64) -> f64 {
        if self.min >= self.max {
            return self.min;
        }
        if position >= 100.0 {
            return self.max;
        }
        if position <= 0.0 {
            return self.min;
        }
        self.min + (position / 100.0) * (self.max - self.min)
    }

    /// Whether the thumb at `position` has reached or passed the end of
    /// `gap`. Drives the "active" visual state of a break marker.
    pub fn gap_reached(position: f64, gap: Gap) -> bool {
        position >= gap.end
    }
}

/// Generate `count` daily-spaced timestamps ending at `now_ms`.
pub fn sample_timestamps(count: usize, now_ms: f64) -> Vec<f64> {
    (0..count)
        .map(|i| now_ms - (count - 1 - i) as f64 * ONE_DAY_MS)
        .collect()
}

/// Current wall-clock time in milliseconds since the Unix epoch.
fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as f64)
        .unwrap_or(0.0)
}
