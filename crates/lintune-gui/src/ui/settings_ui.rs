use crate::keybinds::{Action, KeyBindings, Rebind};
use crate::settings::{AppSettings, ChartView};
use crate::ui::main_frame::KEYBINDS_FILE;
use egui::{Context, ScrollArea};

pub fn settings_ui(
    ctx: &Context,
    settings: &mut AppSettings,
    keybinds: &mut KeyBindings,
    awaiting_rebind: &mut Option<Action>,
) {
    egui::SidePanel::right("Settings panel").show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Chart");
            egui::ComboBox::from_label("Chart view")
                .selected_text(settings.chart_view.to_string())
                .show_ui(ui, |ui| {
                    for view in [ChartView::Canvas, ChartView::Plot] {
                        ui.selectable_value(&mut settings.chart_view, view, view.to_string());
                    }
                });

            egui::Grid::new("chart_size_grid").min_col_width(80.).show(ui, |ui| {
                ui.label("Width");
                let w = ui.add(egui::DragValue::new(&mut settings.chart_w).range(200.0..=2000.));
                if w.double_clicked() {
                    settings.chart_w = AppSettings::default().chart_w;
                }
                ui.end_row();

                ui.label("Height");
                let h = ui.add(egui::DragValue::new(&mut settings.chart_h).range(150.0..=1500.));
                if h.double_clicked() {
                    settings.chart_h = AppSettings::default().chart_h;
                }
                ui.end_row();
            });
            ui.label("Double click to reset");

            ui.separator();
            ui.heading("Keyboard");
            ui.label("Press rebind and hit key to set keybind");
            ui.label("Esc to cancel");
            egui::Grid::new("keybinds_grid").striped(true).show(ui, |ui| {
                for action in Action::ALL {
                    ui.label(action.to_string());
                    let key = keybinds.key_for(action).map(|k| k.name()).unwrap_or("Unbound");
                    ui.monospace(key);

                    let rebind_text = if *awaiting_rebind == Some(action) {
                        "Press key to rebind"
                    } else {
                        "Rebind"
                    };
                    if ui.button(rebind_text).clicked() {
                        *awaiting_rebind = Some(action);
                    }
                    if keybinds.key_for(action).is_some() && ui.button("Unbind").clicked() {
                        keybinds.remove(&action);
                        save_keybinds(keybinds);
                        *awaiting_rebind = None;
                    }
                    ui.end_row();
                }
            });
        });
    });

    if let Some(action) = *awaiting_rebind {
        match ctx.input(|i| keybinds.rebind_from_events(action, &i.raw.events)) {
            Rebind::Pending => {},
            Rebind::Cancelled => *awaiting_rebind = None,
            Rebind::Bound(key) => {
                log::info!("{action} bound to {}", key.name());
                save_keybinds(keybinds);
                *awaiting_rebind = None;
            },
        }
    }
}

fn save_keybinds(keybinds: &KeyBindings) {
    if let Err(e) = keybinds.save_to_file(KEYBINDS_FILE) {
        log::warn!("could not save keybindings: {e}");
    }
}
