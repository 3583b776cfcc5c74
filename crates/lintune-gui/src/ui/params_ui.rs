use egui::{RichText, Slider, Ui};
use lintune_core::session::{format_mse, format_param};
use lintune_core::{ParamRange, Session, INTERCEPT_RANGE, SLOPE_RANGE};

/// Slider for one parameter. Returns the new value when the user moved it.
fn param_slider(ui: &mut Ui, label: &str, value: f64, range: &ParamRange) -> Option<f64> {
    let mut edited = value;
    ui.label(format!("{label}: {}", format_param(value)));
    let response = ui.add(
        Slider::new(&mut edited, range.bounds())
            .step_by(range.step)
            .show_value(false)
            .clamping(egui::SliderClamping::Always),
    );
    response.changed().then_some(edited)
}

pub fn parameters_ui(ui: &mut Ui, session: &mut Session) {
    ui.heading("Parameters");
    ui.add_space(8.);

    let params = session.params();
    if let Some(v) = param_slider(ui, "Slope (m)", params.slope, &SLOPE_RANGE) {
        session.set_slope(v);
    }
    ui.add_space(4.);
    if let Some(v) = param_slider(ui, "Y-Intercept (b)", params.intercept, &INTERCEPT_RANGE) {
        session.set_intercept(v);
    }

    ui.add_space(12.);
    ui.separator();
    ui.heading("Model Performance");
    ui.label("Mean Squared Error (MSE)");
    ui.label(RichText::new(format_mse(session.metric())).strong().size(22.));

    if let Some(best) = session.least_squares() {
        ui.add_space(4.);
        ui.label(RichText::new(format!("Least squares: {best}")).weak());
    }

    ui.add_space(12.);
    if ui.button("Reset Parameters").clicked() {
        session.reset();
    }
}
