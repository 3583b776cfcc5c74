use crate::plot::scene::{Axis, Marker, Scene, Segment};

/// A drawing surface the renderer owns for the duration of one redraw.
///
/// Every redraw starts with [`Canvas::clear`]; implementations must drop
/// anything drawn before it.
pub trait Canvas {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;
    fn draw_axis(&mut self, axis: &Axis) -> Result<(), Self::Error>;
    fn draw_marker(&mut self, marker: &Marker) -> Result<(), Self::Error>;
    fn draw_fit_line(&mut self, line: &Segment) -> Result<(), Self::Error>;
}

/// Clear `canvas`, then draw axes, markers and the fit line of `scene`.
pub fn paint<C: Canvas + ?Sized>(canvas: &mut C, scene: Option<&Scene>) -> Result<(), C::Error> {
    canvas.clear()?;
    let Some(scene) = scene else {
        return Ok(());
    };
    canvas.draw_axis(&scene.x_axis)?;
    canvas.draw_axis(&scene.y_axis)?;
    for marker in &scene.markers {
        canvas.draw_marker(marker)?;
    }
    canvas.draw_fit_line(&scene.fit_line)
}
