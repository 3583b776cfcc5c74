use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Bounds and granularity of one tunable parameter, mirroring a range control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

pub const SLOPE_RANGE: ParamRange = ParamRange { min: -5., max: 5., step: 0.01, default: 1. };
pub const INTERCEPT_RANGE: ParamRange =
    ParamRange { min: -10., max: 10., step: 0.1, default: 2. };

impl ParamRange {
    pub fn bounds(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }

    /// Clamp into `[min, max]` and snap to the step grid.
    ///
    /// Both ranges have `min` on the grid, so snapping to multiples of `step`
    /// is the same as snapping relative to `min`. Dividing by the inverse step
    /// keeps values like `0.3` exact instead of `0.30000000000000004`.
    pub fn clamp(&self, v: f64) -> f64 {
        let per_unit = (1. / self.step).round();
        let snapped = (v.clamp(self.min, self.max) * per_unit).round() / per_unit;
        snapped.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parameters {
    pub slope: f64,
    pub intercept: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self { slope: SLOPE_RANGE.default, intercept: INTERCEPT_RANGE.default }
    }
}

impl Parameters {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {:.2}x + {:.2}", self.slope, self.intercept)
    }
}

/// Sole owner of the tunable parameters.
///
/// Setters never fail: out of range input is clamped and non-finite input is
/// dropped. `revision` increases on every effective change.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    params: Parameters,
    revision: u64,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> Parameters {
        self.params
    }
    pub fn slope(&self) -> f64 {
        self.params.slope
    }
    pub fn intercept(&self) -> f64 {
        self.params.intercept
    }
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_slope(&mut self, v: f64) -> bool {
        match accept(&SLOPE_RANGE, v, self.params.slope) {
            Some(slope) => {
                self.params.slope = slope;
                self.revision += 1;
                true
            },
            None => false,
        }
    }

    pub fn set_intercept(&mut self, v: f64) -> bool {
        match accept(&INTERCEPT_RANGE, v, self.params.intercept) {
            Some(intercept) => {
                self.params.intercept = intercept;
                self.revision += 1;
                true
            },
            None => false,
        }
    }

    pub fn nudge_slope(&mut self, steps: i32) -> bool {
        self.set_slope(self.params.slope + steps as f64 * SLOPE_RANGE.step)
    }
    pub fn nudge_intercept(&mut self, steps: i32) -> bool {
        self.set_intercept(self.params.intercept + steps as f64 * INTERCEPT_RANGE.step)
    }

    pub fn reset(&mut self) -> bool {
        let defaults = Parameters::default();
        if self.params == defaults {
            return false;
        }
        self.params = defaults;
        self.revision += 1;
        true
    }
}

// Some(new value) when `v` is usable and differs from `current`.
fn accept(range: &ParamRange, v: f64, current: f64) -> Option<f64> {
    if !v.is_finite() {
        return None;
    }
    let v = range.clamp(v);
    if v == current {
        None
    } else {
        Some(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let store = ParameterStore::new();
        assert_eq!(store.params(), Parameters::new(1., 2.));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_clamps_to_range() {
        let mut store = ParameterStore::new();
        store.set_slope(12.);
        store.set_intercept(-40.);
        assert_eq!(store.slope(), 5.);
        assert_eq!(store.intercept(), -10.);
    }

    #[test]
    fn test_snaps_to_step() {
        let mut store = ParameterStore::new();
        store.set_slope(0.123);
        store.set_intercept(0.26);
        assert_eq!(store.slope(), 0.12);
        assert_eq!(store.intercept(), 0.3);
    }

    #[test]
    fn test_non_finite_ignored() {
        let mut store = ParameterStore::new();
        assert!(!store.set_slope(f64::NAN));
        assert!(!store.set_intercept(f64::INFINITY));
        assert_eq!(store.params(), Parameters::default());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_revision_only_on_change() {
        let mut store = ParameterStore::new();
        assert!(!store.set_slope(1.));
        assert!(store.set_slope(2.));
        assert!(!store.set_slope(2.));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut store = ParameterStore::new();
        store.set_slope(-4.37);
        store.set_intercept(9.9);
        assert!(store.reset());
        assert_eq!(store.params(), Parameters::new(1., 2.));
        // already at defaults
        assert!(!store.reset());
        assert_eq!(store.params(), Parameters::new(1., 2.));
    }

    #[test]
    fn test_reset_from_sampled_states() {
        let mut rng = rand::rng();
        let mut store = ParameterStore::new();
        for _ in 0..500 {
            store.set_slope(rng.random_range(SLOPE_RANGE.bounds()));
            store.set_intercept(rng.random_range(INTERCEPT_RANGE.bounds()));
            if rng.random_bool(0.3) {
                store.nudge_slope(rng.random_range(-50..=50));
            }
            store.reset();
            assert_eq!(store.params(), Parameters::new(1., 2.));
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(SLOPE_RANGE.clamp(-7.), -5.);
        assert_eq!(SLOPE_RANGE.clamp(2.345678), 2.35);
        assert_eq!(INTERCEPT_RANGE.clamp(10.04), 10.);
    }

    #[test]
    fn test_nudge() {
        let mut store = ParameterStore::new();
        store.nudge_slope(3);
        store.nudge_intercept(-2);
        assert_eq!(store.slope(), 1.03);
        assert_eq!(store.intercept(), 1.8);

        store.set_slope(5.);
        assert!(!store.nudge_slope(1));
        assert_eq!(store.slope(), 5.);
    }
}
