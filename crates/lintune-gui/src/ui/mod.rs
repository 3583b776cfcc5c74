pub mod chart_ui;
pub mod main_frame;
pub mod params_ui;
pub mod settings_ui;
