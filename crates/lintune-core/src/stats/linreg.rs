use crate::dataset::Dataset;
use crate::params::Parameters;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinReg {
    pub intercept: f64,
    pub slope: f64,
}

impl fmt::Display for LinReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {:.6}x + {:.6}", self.slope, self.intercept)
    }
}

impl Default for LinReg {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Parameters> for LinReg {
    fn from(p: Parameters) -> Self {
        Self::from_val(p.intercept, p.slope)
    }
}

impl LinReg {
    pub fn new() -> Self {
        Self { intercept: 0., slope: 0. }
    }
    pub fn calculate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
    pub fn from_val(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Ordinary least squares fit.
    ///
    /// `None` when the inputs are empty, differ in length or x has no variance.
    pub fn train(x: &[f64], y: &[f64]) -> Option<Self> {
        if x.is_empty() || x.len() != y.len() {
            return None;
        }
        let n = x.len() as f64;
        let avg_x = x.iter().sum::<f64>() / n;
        let avg_y = y.iter().sum::<f64>() / n;

        let ss_xx: f64 = x.iter().map(|xi| (xi - avg_x).powi(2)).sum();
        if ss_xx == 0. {
            return None;
        }
        let ss_xy: f64 = x.iter().zip(y.iter()).map(|(xi, yi)| (xi - avg_x) * (yi - avg_y)).sum();

        let slope = ss_xy / ss_xx;
        let intercept = avg_y - slope * avg_x;
        Some(Self { intercept, slope })
    }

    pub fn fit(data: &Dataset) -> Option<Self> {
        Self::train(&data.xs(), &data.ys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_exact_line() {
        let x = [1., 2., 3., 4.];
        let y = [3., 5., 7., 9.];
        let model = LinReg::train(&x, &y).unwrap();
        assert!((model.slope - 2.).abs() < 1e-12);
        assert!((model.intercept - 1.).abs() < 1e-12);
        assert!((model.calculate(10.) - 21.).abs() < 1e-12);
    }

    #[test]
    fn test_train_sample() {
        let model = LinReg::fit(&Dataset::sample()).unwrap();
        assert!((model.slope - 0.8787878787878788).abs() < 1e-9);
        assert!((model.intercept - 1.0866666666666667).abs() < 1e-9);
    }

    #[test]
    fn test_train_degenerate() {
        assert_eq!(LinReg::train(&[], &[]), None);
        assert_eq!(LinReg::train(&[1., 2.], &[1.]), None);
        assert_eq!(LinReg::train(&[2., 2., 2.], &[1., 2., 3.]), None);
    }
}
