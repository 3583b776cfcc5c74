use crate::chart_style::UiColor;
use crate::settings::{AppSettings, ChartView};

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Ui, Vec2};
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};
use lintune_core::plot::{
    paint, shared_domain, Axis, AxisKind, Canvas, ElementKind, Marker, Pixel, PlotSize, Segment,
};
use lintune_core::Session;
use std::convert::Infallible;

const TICK_LEN: f32 = 5.;

/// Collects the egui shapes of a scene. Scene pixels are relative to the top
/// left corner of `rect`.
pub struct PainterCanvas {
    painter: Painter,
    rect: Rect,
    shapes: Vec<Shape>,
}

impl PainterCanvas {
    pub fn new(painter: Painter, rect: Rect) -> Self {
        Self { painter, rect, shapes: Vec::new() }
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    fn pos(&self, p: Pixel) -> Pos2 {
        self.rect.min + Vec2::new(p.x as f32, p.y as f32)
    }
}

/// Shapes of the last painted scene, keyed by parameter revision and chart rect.
#[derive(Default)]
pub struct ChartCache {
    key: Option<(u64, Rect)>,
    shapes: Vec<Shape>,
}

impl ChartCache {
    pub fn is_current(&self, revision: u64, rect: Rect) -> bool {
        self.key == Some((revision, rect))
    }

    pub fn store(&mut self, revision: u64, rect: Rect, shapes: Vec<Shape>) {
        self.key = Some((revision, rect));
        self.shapes = shapes;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Canvas for PainterCanvas {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.shapes.clear();
        self.shapes.push(Shape::rect_filled(self.rect, 0.0, Color32::WHITE));
        Ok(())
    }

    fn draw_axis(&mut self, axis: &Axis) -> Result<(), Infallible> {
        let stroke = ElementKind::Axis.stroke();
        let color = ElementKind::Axis.color();
        self.shapes.push(Shape::line_segment([self.pos(axis.start), self.pos(axis.end)], stroke));

        for tick in &axis.ticks {
            let at = self.pos(tick.at);
            let (mark_end, anchor, label_at) = match axis.kind {
                AxisKind::X => (
                    at + Vec2::new(0., TICK_LEN),
                    Align2::CENTER_TOP,
                    at + Vec2::new(0., TICK_LEN + 2.),
                ),
                AxisKind::Y => (
                    at - Vec2::new(TICK_LEN, 0.),
                    Align2::RIGHT_CENTER,
                    at - Vec2::new(TICK_LEN + 2., 0.),
                ),
            };
            self.shapes.push(Shape::line_segment([at, mark_end], stroke));
            let label = self.painter.fonts(|f| {
                Shape::text(f, label_at, anchor, &tick.label, FontId::proportional(12.), color)
            });
            self.shapes.push(label);
        }
        Ok(())
    }

    fn draw_marker(&mut self, marker: &Marker) -> Result<(), Infallible> {
        let color = ElementKind::Marker.color();
        let center = self.pos(marker.center);
        self.shapes.push(Shape::circle_filled(center, marker.radius as f32, color));
        Ok(())
    }

    fn draw_fit_line(&mut self, line: &Segment) -> Result<(), Infallible> {
        let path = [self.pos(line.from), self.pos(line.to)];
        self.shapes.extend(Shape::dashed_line(&path, ElementKind::FitLine.stroke(), 8., 4.));
        Ok(())
    }
}

pub fn chart_ui(
    ui: &mut Ui,
    session: &mut Session,
    settings: &AppSettings,
    cache: &mut ChartCache,
) {
    match settings.chart_view {
        ChartView::Canvas => canvas_chart(ui, session, settings, cache),
        ChartView::Plot => interactive_chart(ui, session, settings),
    }
}

fn canvas_chart(
    ui: &mut Ui,
    session: &mut Session,
    settings: &AppSettings,
    cache: &mut ChartCache,
) {
    let (response, painter) =
        ui.allocate_painter(Vec2::new(settings.chart_w, settings.chart_h), Sense::hover());
    let rect = response.rect;

    // first frame mounts, later frames only redraw on a real size change
    session.resize(PlotSize::new(rect.width().round() as u32, rect.height().round() as u32));

    if !cache.is_current(session.revision(), rect) {
        let mut canvas = PainterCanvas::new(painter.clone(), rect);
        paint(&mut canvas, session.scene()).unwrap_or_else(|e| match e {});
        cache.store(session.revision(), rect, canvas.into_shapes());
        log::trace!("rebuilt chart shapes for revision {}", session.revision());
    }
    painter.extend(cache.shapes().iter().cloned());
}

fn interactive_chart(ui: &mut Ui, session: &Session, settings: &AppSettings) {
    let data = session.dataset();
    let params = session.params();
    let Some((d0, d1)) = shared_domain(data.points()) else {
        ui.label("No data to plot");
        return;
    };

    let points: PlotPoints = data.points().iter().map(|p| [p.x, p.y]).collect();
    let line: PlotPoints = vec![[d0, params.predict(d0)], [d1, params.predict(d1)]].into();

    Plot::new("regression_plot")
        .width(settings.chart_w)
        .height(settings.chart_h)
        .data_aspect(1.0)
        .include_x(d0)
        .include_x(d1)
        .include_y(d0)
        .include_y(d1)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new("data", points)
                    .shape(MarkerShape::Circle)
                    .radius(5.)
                    .color(ElementKind::Marker.color()),
            );
            plot_ui.line(
                Line::new(format!("{params}"), line)
                    .color(ElementKind::FitLine.color())
                    .stroke(ElementKind::FitLine.stroke())
                    .style(ElementKind::FitLine.style()),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_rect() -> Rect {
        Rect::from_min_size(Pos2::new(270., 60.), Vec2::new(600., 400.))
    }

    #[test]
    fn test_cache_starts_stale() {
        let cache = ChartCache::default();
        assert!(!cache.is_current(0, chart_rect()));
        assert!(cache.shapes().is_empty());
    }

    #[test]
    fn test_cache_follows_session_revision() {
        let mut session = Session::default();
        let mut cache = ChartCache::default();
        cache.store(session.revision(), chart_rect(), vec![Shape::Noop]);
        assert!(cache.is_current(session.revision(), chart_rect()));

        // same value, no revision bump
        session.set_slope(session.params().slope);
        assert!(cache.is_current(session.revision(), chart_rect()));

        session.nudge_slope(1);
        assert!(!cache.is_current(session.revision(), chart_rect()));
    }

    #[test]
    fn test_cache_invalidated_by_move_or_resize() {
        let mut cache = ChartCache::default();
        cache.store(3, chart_rect(), Vec::new());
        assert!(!cache.is_current(3, chart_rect().translate(Vec2::new(0., 10.))));
        assert!(!cache.is_current(3, chart_rect().expand(20.)));
    }
}
