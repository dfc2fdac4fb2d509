use std::process::ExitCode;

use backend::system::{ContextConfig, Platform, CLEAR_COLOR};

const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;
const WINDOW_TITLE: &str = "gl-smoke";

fn main() -> ExitCode {
    env_logger::init();

    let platform = match Platform::initialize() {
        Ok(p) => p,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    platform.configure_context(&ContextConfig::default());

    let mut system = match platform.create_window(WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_TITLE) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    while !system.close_requested() {
        system.clear_screen(CLEAR_COLOR);
        system.present();
        system.pump_events();
    }

    log::info!("window closed, shutting down");
    ExitCode::SUCCESS
}
