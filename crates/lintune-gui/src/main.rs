#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]
mod chart_style;
mod keybinds;
mod settings;
mod ui;

use crate::ui::main_frame::TunerApp;
use lintune_core::cmd::cli::Cli;
use lintune_core::cmd::config::Config;

use clap::Parser;
use std::env;
use std::process;

#[cfg(windows)]
fn attach_to_parent_console_if_present() {
    use std::fs::OpenOptions;
    use std::os::windows::io::AsRawHandle;
    use windows::Win32::Foundation::HANDLE;
    use windows::Win32::System::Console::{
        AttachConsole, SetStdHandle, ATTACH_PARENT_PROCESS, STD_ERROR_HANDLE, STD_INPUT_HANDLE,
        STD_OUTPUT_HANDLE,
    };

    unsafe {
        // Succeeds when started from a terminal. Explorer launches and debug
        // builds that already own a console get an error and need nothing.
        let result = AttachConsole(ATTACH_PARENT_PROCESS);

        if result.is_ok() {
            if let Ok(out_file) = OpenOptions::new().write(true).open("CONOUT$") {
                let _ = SetStdHandle(STD_OUTPUT_HANDLE, HANDLE(out_file.as_raw_handle() as *mut _));
            }
            if let Ok(err_file) = OpenOptions::new().write(true).open("CONOUT$") {
                let _ = SetStdHandle(STD_ERROR_HANDLE, HANDLE(err_file.as_raw_handle() as *mut _));
            }
            if let Ok(in_file) = OpenOptions::new().read(true).open("CONIN$") {
                let _ = SetStdHandle(STD_INPUT_HANDLE, HANDLE(in_file.as_raw_handle() as *mut _));
            }
        }
    }
}

#[cfg(not(windows))]
fn attach_to_parent_console_if_present() {
    // no-op on non-Windows
}

fn main() -> eframe::Result {
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        // CLI mode: attach console on Windows so output is visible
        attach_to_parent_console_if_present();
        env_logger::init();

        let cli = Cli::parse();
        let cfg: Config = cli.into_config();
        if let Err(e) = cfg.run() {
            eprintln!("{e}");
            process::exit(1);
        }
        process::exit(0);
    }

    env_logger::init();
    let app = TunerApp::new();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Linear Regression Tuner")
            .with_inner_size([1000.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native("lintune", options, Box::new(|_cc| Ok(Box::new(app))))
}
