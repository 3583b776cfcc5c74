use crate::keybinds::{Action, KeyBindings};
use crate::settings::{AppSettings, SETTINGS_FILE};
use crate::ui::chart_ui::{chart_ui, ChartCache};
use crate::ui::params_ui::parameters_ui;
use crate::ui::settings_ui::settings_ui;

use egui::{FontId, TextStyle};
use lintune_core::Session;
use std::path::Path;

pub const KEYBINDS_FILE: &str = "keybinds.json";

#[derive(Default)]
pub struct TunerApp {
    pub session: Session,
    pub settings: AppSettings,
    pub keybinds: KeyBindings,
    pub awaiting_rebind: Option<Action>,
    pub chart_cache: ChartCache,
    pub show_settings: bool,
}

impl TunerApp {
    pub fn new() -> Self {
        let keybinds = KeyBindings::load_or_default(KEYBINDS_FILE);
        let settings = AppSettings::load_or_default(Path::new(SETTINGS_FILE));
        Self { keybinds, settings, ..Default::default() }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // sliders and drag values own the arrows while focused, and a pending
        // rebind owns the next key press
        if self.awaiting_rebind.is_some() || ctx.memory(|m| m.focused().is_some()) {
            return;
        }
        let kb = &self.keybinds;
        let triggered: Vec<Action> =
            ctx.input(|i| Action::ALL.into_iter().filter(|a| kb.action_triggered(*a, i)).collect());

        for action in triggered {
            match action {
                Action::IncreaseSlope => {
                    self.session.nudge_slope(1);
                },
                Action::DecreaseSlope => {
                    self.session.nudge_slope(-1);
                },
                Action::IncreaseIntercept => {
                    self.session.nudge_intercept(1);
                },
                Action::DecreaseIntercept => {
                    self.session.nudge_intercept(-1);
                },
                Action::ResetParameters => {
                    self.session.reset();
                },
                Action::ToggleShowSettings => self.show_settings = !self.show_settings,
            }
        }
    }

    fn apply_font_size(&self, ctx: &egui::Context) {
        let font_size = self.settings.font_size;
        let mut style = (*ctx.style()).clone();
        style.text_styles = [
            (TextStyle::Heading, FontId::proportional(font_size + 6.0)),
            (TextStyle::Body, FontId::proportional(font_size)),
            (TextStyle::Monospace, FontId::monospace(font_size)),
            (TextStyle::Button, FontId::proportional(font_size)),
            (TextStyle::Small, FontId::proportional(font_size - 2.0)),
        ]
        .into();
        ctx.set_style(style);
    }
}

impl eframe::App for TunerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_font_size(ctx);
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
                ui.add_space(16.0);

                if self.show_settings {
                    ui.toggle_value(&mut self.show_settings, "Hide settings");
                } else {
                    ui.toggle_value(&mut self.show_settings, "Show settings");
                }
                ui.add_space(16.0);

                egui::ComboBox::from_label("Select font size")
                    .selected_text(format!("{}", self.settings.font_size))
                    .show_ui(ui, |ui| {
                        for size in 10..=32 {
                            if ui
                                .selectable_label(
                                    self.settings.font_size == size as f32,
                                    size.to_string(),
                                )
                                .clicked()
                            {
                                self.settings.font_size = size as f32;
                            }
                        }
                    });
            });
        });

        if self.show_settings {
            settings_ui(ctx, &mut self.settings, &mut self.keybinds, &mut self.awaiting_rebind);
        } else {
            self.awaiting_rebind = None;
        }

        egui::SidePanel::left("parameters_panel").resizable(false).min_width(260.).show(ctx, |ui| {
            parameters_ui(ui, &mut self.session);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Interactive Linear Regression Tuner");
            ui.label("Adjust the slope and intercept to find the best fit for the data.");
            ui.add_space(8.);
            chart_ui(ui, &mut self.session, &self.settings, &mut self.chart_cache);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.settings.save_to_file(Path::new(SETTINGS_FILE)) {
            log::warn!("could not save settings: {e}");
        }
        if let Err(e) = self.keybinds.save_to_file(KEYBINDS_FILE) {
            log::warn!("could not save keybindings: {e}");
        }
    }
}
