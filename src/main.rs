mod controller;
mod error;
mod format;
mod log;
mod model;
mod process;
mod rts;
mod settings;
mod ui;

use crate::{
    controller::Controller,
    model::{events::UiEvent, Model},
    rts::pipewire::{MetadataStore, ProcessRunner},
    settings::Settings,
};
use std::time::Duration;
use tracing::{info, warn};

fn main() {
    log::parse_log_level();

    let dirs = match settings::scaffold() {
        Some(d) => d,
        None => log::oops("Could not determine a configuration directory", 1),
    };
    let settings = match Settings::init(dirs.config_dir()) {
        Ok(s) => s,
        Err(e) => log::oops(format!("Failed to initialise settings: {}", e), 1),
    };
    let app = settings.r().app().clone();

    if !process::daemon_running(&app.daemon_process) {
        warn!(
            "No '{}' process found, clock readings will stay unknown",
            app.daemon_process
        );
    }

    let runner = ProcessRunner::new(Duration::from_millis(app.command_timeout_ms));
    let controller = Controller::new(MetadataStore::new(runner, &app));
    let poll = match app.poll_interval_ms {
        0 => None,
        ms => Some(Duration::from_millis(ms)),
    };

    let (rt, handle) = ui::UiRuntime::new();
    let exit_tx = rt.sender();
    if let Err(e) = ctrlc::set_handler(move || {
        exit_tx.send(UiEvent::Exit);
    }) {
        warn!("Failed to install termination handler: {}", e);
    }

    let model = model::dispatch(Model::new(controller), handle, poll);
    let presenter = ui::term::spawn(rt);

    let _ = model.join();
    let _ = presenter.join();
    info!("pwclockctl exiting, goodbye");
}
