use crate::dataset::DataPoint;
use crate::params::Parameters;
use crate::plot::canvas::{paint, Canvas};
use crate::plot::scale::{shared_domain, LinearScale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotSize {
    pub width: u32,
    pub height: u32,
}

impl PlotSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for PlotSize {
    fn default() -> Self {
        Self { width: 600, height: 400 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 20., right: 30., bottom: 40., left: 50. }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What a drawn element represents, so each surface can pick its own colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Axis,
    Marker,
    FitLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    pub at: Pixel,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub kind: AxisKind,
    pub start: Pixel,
    pub end: Pixel,
    pub ticks: Vec<TickMark>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: Pixel,
    pub radius: f64,
    pub point: DataPoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Pixel,
    pub to: Pixel,
}

/// Pixel-space description of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: PlotSize,
    pub domain: (f64, f64),
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub markers: Vec<Marker>,
    pub fit_line: Segment,
}

/// Turns `(points, params)` into a [`Scene`] for a surface of known size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRenderer {
    pub size: PlotSize,
    pub margins: Margins,
    pub marker_radius: f64,
    pub tick_count: usize,
}

impl Default for PlotRenderer {
    fn default() -> Self {
        Self::new(PlotSize::default())
    }
}

impl PlotRenderer {
    pub fn new(size: PlotSize) -> Self {
        Self { size, margins: Margins::default(), marker_radius: 5., tick_count: 5 }
    }

    pub fn with_size(self, size: PlotSize) -> Self {
        Self { size, ..self }
    }

    fn x_scale(&self, domain: (f64, f64)) -> LinearScale {
        LinearScale::new(domain, (self.margins.left, self.size.width as f64 - self.margins.right))
    }

    fn y_scale(&self, domain: (f64, f64)) -> LinearScale {
        LinearScale::new(domain, (self.size.height as f64 - self.margins.bottom, self.margins.top))
    }

    /// `None` when there are no points: nothing gets drawn, not even axes.
    pub fn build_scene(&self, points: &[DataPoint], params: Parameters) -> Option<Scene> {
        let domain = shared_domain(points)?;
        let xs = self.x_scale(domain);
        let ys = self.y_scale(domain);

        let baseline = ys.range.0;
        let x_axis = Axis {
            kind: AxisKind::X,
            start: Pixel::new(xs.range.0, baseline),
            end: Pixel::new(xs.range.1, baseline),
            ticks: xs
                .ticks(self.tick_count)
                .into_iter()
                .map(|t| TickMark { at: Pixel::new(xs.map(t.value), baseline), label: t.label })
                .collect(),
        };

        let left = xs.range.0;
        let y_axis = Axis {
            kind: AxisKind::Y,
            start: Pixel::new(left, ys.range.0),
            end: Pixel::new(left, ys.range.1),
            ticks: ys
                .ticks(self.tick_count)
                .into_iter()
                .map(|t| TickMark { at: Pixel::new(left, ys.map(t.value)), label: t.label })
                .collect(),
        };

        let markers = points
            .iter()
            .map(|&p| Marker {
                center: Pixel::new(xs.map(p.x), ys.map(p.y)),
                radius: self.marker_radius,
                point: p,
            })
            .collect();

        // evaluated at the domain ends, not clipped to the plot area
        let (d0, d1) = domain;
        let fit_line = Segment {
            from: Pixel::new(xs.map(d0), ys.map(params.predict(d0))),
            to: Pixel::new(xs.map(d1), ys.map(params.predict(d1))),
        };

        Some(Scene { size: self.size, domain, x_axis, y_axis, markers, fit_line })
    }

    /// Clear `canvas` and draw the chart for `(points, params)` onto it.
    ///
    /// Returns the scene that was drawn, `None` if the canvas was left empty.
    pub fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        points: &[DataPoint],
        params: Parameters,
    ) -> Result<Option<Scene>, C::Error> {
        let scene = self.build_scene(points, params);
        paint(canvas, scene.as_ref())?;
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use std::convert::Infallible;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Axis(AxisKind),
        Marker(Pixel),
        FitLine(Segment),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        type Error = Infallible;
        fn clear(&mut self) -> Result<(), Infallible> {
            self.ops.clear();
            self.ops.push(Op::Clear);
            Ok(())
        }
        fn draw_axis(&mut self, axis: &Axis) -> Result<(), Infallible> {
            self.ops.push(Op::Axis(axis.kind));
            Ok(())
        }
        fn draw_marker(&mut self, marker: &Marker) -> Result<(), Infallible> {
            self.ops.push(Op::Marker(marker.center));
            Ok(())
        }
        fn draw_fit_line(&mut self, line: &Segment) -> Result<(), Infallible> {
            self.ops.push(Op::FitLine(*line));
            Ok(())
        }
    }

    fn renderer() -> PlotRenderer {
        PlotRenderer::new(PlotSize::new(600, 400))
    }

    #[test]
    fn test_scene_layout() {
        let data = Dataset::sample();
        let scene = renderer().build_scene(data.points(), Parameters::default()).unwrap();

        assert_eq!(scene.markers.len(), 10);
        assert_eq!(scene.x_axis.start, Pixel::new(50., 360.));
        assert_eq!(scene.x_axis.end, Pixel::new(570., 360.));
        assert_eq!(scene.y_axis.start, Pixel::new(50., 360.));
        assert_eq!(scene.y_axis.end, Pixel::new(50., 20.));
        assert_eq!(scene.x_axis.ticks.len(), 6);
        assert_eq!(scene.x_axis.ticks[0].at, Pixel::new(50., 360.));
    }

    #[test]
    fn test_markers_share_scale() {
        // 400x400 plot area: a point on the diagonal lands on the pixel diagonal
        let r = PlotRenderer::new(PlotSize::new(480, 460));
        let points = [DataPoint::new(4., 4.), DataPoint::new(10., 2.)];
        let scene = r.build_scene(&points, Parameters::default()).unwrap();
        let c = scene.markers[0].center;
        assert!(((c.x - 50.) - (420. - c.y)).abs() < 1e-9);
    }

    #[test]
    fn test_markers_share_domain_on_wide_area() {
        // unequal pixel ranges still map the same domain fraction on both axes
        let r = PlotRenderer::new(PlotSize::new(580, 460));
        let points = [DataPoint::new(4., 4.), DataPoint::new(10., 2.)];
        let scene = r.build_scene(&points, Parameters::default()).unwrap();
        let c = scene.markers[0].center;
        assert!(((c.x - 50.) / 500. - (420. - c.y) / 400.).abs() < 1e-9);
    }

    #[test]
    fn test_fit_line_endpoints() {
        let data = Dataset::sample();
        let r = renderer();
        let scene = r.build_scene(data.points(), Parameters::new(1., 2.)).unwrap();
        let (_, hi) = scene.domain;
        let ys = r.y_scale(scene.domain);

        assert_eq!(scene.fit_line.from.x, 50.);
        assert_eq!(scene.fit_line.to.x, 570.);
        assert!((scene.fit_line.from.y - ys.map(2.)).abs() < 1e-9);
        assert!((scene.fit_line.to.y - ys.map(hi + 2.)).abs() < 1e-9);
    }

    #[test]
    fn test_fit_line_moves_with_params() {
        let data = Dataset::sample();
        let r = renderer();
        let before = r.build_scene(data.points(), Parameters::new(1., 2.)).unwrap();
        let after = r.build_scene(data.points(), Parameters::new(5., -10.)).unwrap();
        assert_ne!(before.fit_line, after.fit_line);
        assert_eq!(before.markers, after.markers);
        // y = 5x - 10 starts below the x axis
        assert!(after.fit_line.from.y > before.x_axis.start.y);
    }

    #[test]
    fn test_render_idempotent() {
        let data = Dataset::sample();
        let r = renderer();
        let mut canvas = Recorder::default();
        let first = r.render(&mut canvas, data.points(), Parameters::default()).unwrap();
        let first_ops = std::mem::take(&mut canvas.ops);
        let second = r.render(&mut canvas, data.points(), Parameters::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first_ops, canvas.ops);
    }

    #[test]
    fn test_render_order() {
        let data = Dataset::sample();
        let mut canvas = Recorder::default();
        renderer().render(&mut canvas, data.points(), Parameters::default()).unwrap();
        assert_eq!(canvas.ops.len(), 1 + 2 + 10 + 1);
        assert_eq!(canvas.ops[0], Op::Clear);
        assert_eq!(canvas.ops[1], Op::Axis(AxisKind::X));
        assert_eq!(canvas.ops[2], Op::Axis(AxisKind::Y));
        assert!(matches!(canvas.ops.last(), Some(Op::FitLine(_))));
    }

    #[test]
    fn test_render_empty_draws_nothing() {
        let mut canvas = Recorder::default();
        let scene = renderer().render(&mut canvas, &[], Parameters::default()).unwrap();
        assert_eq!(scene, None);
        assert_eq!(canvas.ops, vec![Op::Clear]);
    }

    #[test]
    fn test_render_empty_after_full_clears_previous() {
        let data = Dataset::sample();
        let r = renderer();
        let mut canvas = Recorder::default();
        r.render(&mut canvas, data.points(), Parameters::default()).unwrap();
        r.render(&mut canvas, &[], Parameters::default()).unwrap();
        assert_eq!(canvas.ops, vec![Op::Clear]);
    }
}
