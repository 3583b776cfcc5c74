use crate::dataset::DataPoint;
use crate::stats::LinReg;

/// Mean squared error of `y = slope * x + intercept` over `points`.
///
/// An empty point set has no mean; `None` is returned instead of dividing by
/// zero.
pub fn compute_mse(points: &[DataPoint], slope: f64, intercept: f64) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let model = LinReg::from_val(intercept, slope);
    let sum: f64 = residuals(points, &model).map(|r| r * r).sum();
    Some(sum / points.len() as f64)
}

/// Observed minus predicted, in point order.
pub fn residuals<'a>(
    points: &'a [DataPoint],
    model: &'a LinReg,
) -> impl Iterator<Item = f64> + 'a {
    points.iter().map(move |p| p.y - model.calculate(p.x))
}
