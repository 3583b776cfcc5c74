use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Observations the model is tuned against.
const SAMPLE_POINTS: [(f64, f64); 10] = [
    (1., 2.2),
    (2., 2.8),
    (3., 4.5),
    (4., 3.7),
    (5., 5.5),
    (6., 6.1),
    (7., 6.8),
    (8., 8.4),
    (9., 8.9),
    (10., 10.3),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Read-only point set. Nothing hands out mutable access once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::sample()
    }
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_POINTS.iter().map(|&(x, y)| DataPoint::new(x, y)).collect())
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Largest coordinate over both axes, `None` for an empty set.
    pub fn max_coord(&self) -> Option<f64> {
        self.points.iter().map(|p| p.x.max(p.y)).reduce(f64::max)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.points.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_ten_points() {
        let data = Dataset::sample();
        assert_eq!(data.len(), 10);
        assert_eq!(data.points()[0], DataPoint::new(1., 2.2));
        assert_eq!(data.points()[9], DataPoint::new(10., 10.3));
    }

    #[test]
    fn test_max_coord_uses_both_axes() {
        let data = Dataset::new(vec![DataPoint::new(1., 7.), DataPoint::new(3., 2.)]);
        assert_eq!(data.max_coord(), Some(7.));
        assert_eq!(Dataset::sample().max_coord(), Some(10.3));
    }

    #[test]
    fn test_max_coord_empty() {
        assert_eq!(Dataset::empty().max_coord(), None);
    }

    #[test]
    fn test_display() {
        let data = Dataset::new(vec![DataPoint::new(1., 2.5), DataPoint::new(2., 3.)]);
        assert_eq!(data.to_string(), "(1, 2.5) (2, 3)");
    }
}
