use crate::dataset::DataPoint;
use crate::params::Parameters;
use crate::plot::canvas::Canvas;
use crate::plot::scene::{Axis, AxisKind, ElementKind, Marker, Pixel, PlotRenderer, PlotSize, Segment};

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const TICK_LEN: i32 = 5;
const FONT_SIZE: i32 = 12;

#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("svg backend error: {0}")]
    Backend(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Backend(e.to_string())
    }
}

pub trait SvgColor {
    fn rgb(&self) -> RGBColor;
}

impl SvgColor for ElementKind {
    fn rgb(&self) -> RGBColor {
        match self {
            ElementKind::Axis => RGBColor(55, 65, 81),
            ElementKind::Marker => RGBColor(79, 70, 229),
            ElementKind::FitLine => RGBColor(220, 38, 38),
        }
    }
}

fn px(p: Pixel) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

/// SVG surface backed by plotters, writing into a caller-owned string.
///
/// The document is complete once [`SvgCanvas::present`] returns or the
/// canvas is dropped.
pub struct SvgCanvas<'a> {
    area: DrawingArea<SVGBackend<'a>, Shift>,
}

impl<'a> SvgCanvas<'a> {
    pub fn new(buf: &'a mut String, size: PlotSize) -> Self {
        let area = SVGBackend::with_string(buf, (size.width, size.height)).into_drawing_area();
        Self { area }
    }

    pub fn present(&self) -> Result<(), PlotError> {
        self.area.present()?;
        Ok(())
    }
}

impl Canvas for SvgCanvas<'_> {
    type Error = PlotError;

    // plotters has no way to remove drawn elements; painting over the whole
    // area hides them
    fn clear(&mut self) -> Result<(), PlotError> {
        self.area.fill(&WHITE)?;
        Ok(())
    }

    fn draw_axis(&mut self, axis: &Axis) -> Result<(), PlotError> {
        let color = ElementKind::Axis.rgb();
        let line_style = color.stroke_width(1);
        self.area.draw(&PathElement::new(vec![px(axis.start), px(axis.end)], line_style))?;

        for tick in &axis.ticks {
            let (x, y) = px(tick.at);
            let (mark_end, label_at, anchor) = match axis.kind {
                AxisKind::X => (
                    (x, y + TICK_LEN),
                    (x, y + TICK_LEN + 3),
                    Pos::new(HPos::Center, VPos::Top),
                ),
                AxisKind::Y => (
                    (x - TICK_LEN, y),
                    (x - TICK_LEN - 3, y),
                    Pos::new(HPos::Right, VPos::Center),
                ),
            };
            self.area.draw(&PathElement::new(vec![(x, y), mark_end], line_style))?;
            let font = ("sans-serif", FONT_SIZE).into_font().color(&color).pos(anchor);
            self.area.draw(&Text::new(tick.label.clone(), label_at, font))?;
        }
        Ok(())
    }

    fn draw_marker(&mut self, marker: &Marker) -> Result<(), PlotError> {
        let style = ElementKind::Marker.rgb().mix(0.8).filled();
        self.area.draw(&Circle::new(px(marker.center), marker.radius.round() as i32, style))?;
        Ok(())
    }

    fn draw_fit_line(&mut self, line: &Segment) -> Result<(), PlotError> {
        let style = ElementKind::FitLine.rgb().stroke_width(2);
        self.area
            .draw(&DashedPathElement::new(vec![px(line.from), px(line.to)], 8, 4, style))?;
        Ok(())
    }
}

/// Render the chart for `(points, params)` as a standalone SVG document.
pub fn render_svg(
    renderer: &PlotRenderer,
    points: &[DataPoint],
    params: Parameters,
) -> Result<String, PlotError> {
    let mut buf = String::new();
    {
        let mut canvas = SvgCanvas::new(&mut buf, renderer.size);
        renderer.render(&mut canvas, points, params)?;
        canvas.present()?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_svg_document() {
        let data = Dataset::sample();
        let svg = render_svg(&PlotRenderer::default(), data.points(), Parameters::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 10);
    }

    #[test]
    fn test_svg_fit_line_is_dashed() {
        let data = Dataset::sample();
        let r = PlotRenderer::default();
        let scene = r.build_scene(data.points(), Parameters::default()).unwrap();
        // one polyline per axis and per tick mark
        let axis_lines = 2 + scene.x_axis.ticks.len() + scene.y_axis.ticks.len();

        let svg = render_svg(&r, data.points(), Parameters::default()).unwrap();
        let lines = svg.matches("<polyline").count();
        assert!(lines > axis_lines + 2, "fit line drawn as {} piece(s)", lines.saturating_sub(axis_lines));
    }

    #[test]
    fn test_svg_same_input_same_output() {
        let data = Dataset::sample();
        let r = PlotRenderer::default();
        let a = render_svg(&r, data.points(), Parameters::new(2.5, -3.)).unwrap();
        let b = render_svg(&r, data.points(), Parameters::new(2.5, -3.)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_svg_empty_has_no_markers() {
        let svg = render_svg(&PlotRenderer::default(), &[], Parameters::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("<circle").count(), 0);
        assert_eq!(svg.matches("<text").count(), 0);
    }
}
