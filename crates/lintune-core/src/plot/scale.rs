use crate::dataset::DataPoint;

/// Headroom above the largest coordinate.
pub const DOMAIN_PADDING: f64 = 1.1;

/// Domain shared by both axes: `[0, 1.1 * max(max x, max y)]`.
pub fn shared_domain(points: &[DataPoint]) -> Option<(f64, f64)> {
    let max = points.iter().map(|p| p.x.max(p.y)).reduce(f64::max)?;
    Some((0., DOMAIN_PADDING * max))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Linear map from a data interval onto a pixel interval.
///
/// Either interval may be reversed; the y axis uses that to grow upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values (1, 2 or 5 times a power of ten) inside the domain.
    pub fn ticks(&self, target_count: usize) -> Vec<Tick> {
        let lo = self.domain.0.min(self.domain.1);
        let hi = self.domain.0.max(self.domain.1);
        let span = hi - lo;
        if span <= 0. || !span.is_finite() || target_count == 0 {
            return Vec::new();
        }
        let step = nice_step(span / target_count as f64);
        // tolerate rounding when an endpoint sits on the grid
        let first = (lo / step - 1e-9).ceil() as i64;
        let last = (hi / step + 1e-9).floor() as i64;
        (first..=last)
            .map(|i| {
                let value = i as f64 * step;
                Tick { value, label: tick_label(value, step) }
            })
            .collect()
    }
}

fn nice_step(rough: f64) -> f64 {
    let mag = 10f64.powf(rough.log10().floor());
    let normalized = rough / mag;
    if normalized < 1.5 {
        mag
    } else if normalized < 3.5 {
        mag * 2.
    } else if normalized < 7.5 {
        mag * 5.
    } else {
        mag * 10.
    }
}

fn tick_label(v: f64, step: f64) -> String {
    if step >= 0.95 {
        format!("{:.0}", v)
    } else if step >= 0.095 {
        format!("{:.1}", v)
    } else if step >= 0.0095 {
        format!("{:.2}", v)
    } else {
        format!("{:.3}", v)
    }
}
