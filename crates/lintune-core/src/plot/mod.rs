pub mod canvas;
pub mod scale;
pub mod scene;
pub mod svg;

pub use canvas::{paint, Canvas};
pub use scale::{shared_domain, LinearScale, Tick};
pub use scene::{Axis, AxisKind, ElementKind, Margins, Marker, Pixel, PlotRenderer, PlotSize, Scene, Segment};
pub use svg::{render_svg, PlotError, SvgCanvas};
