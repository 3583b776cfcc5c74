use egui::{Color32, Stroke};
use egui_plot::LineStyle;
use lintune_core::plot::ElementKind;

pub trait UiColor {
    fn color(&self) -> Color32;
    fn stroke(&self) -> Stroke;
    fn style(&self) -> LineStyle;
}

impl UiColor for ElementKind {
    fn color(&self) -> Color32 {
        match self {
            ElementKind::Axis => Color32::from_rgb(55, 65, 81),
            ElementKind::Marker => Color32::from_rgb(79, 70, 229),
            ElementKind::FitLine => Color32::from_rgb(220, 38, 38),
        }
    }
    fn stroke(&self) -> Stroke {
        match self {
            ElementKind::Axis => Stroke::new(1.0, self.color()),
            ElementKind::Marker => Stroke::new(1.0, self.color()),
            ElementKind::FitLine => Stroke::new(2.0, self.color()),
        }
    }
    fn style(&self) -> LineStyle {
        match self {
            ElementKind::FitLine => LineStyle::dashed_dense(),
            _ => LineStyle::Solid,
        }
    }
}
