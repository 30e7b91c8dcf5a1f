use benchrig::config::SettingsManager;
use benchrig::error::BenchError;
use benchrig::log_collector;
use benchrig::ui::BenchApp;

fn main() -> benchrig::Result<()> {
    // Logger first: everything after this point reports through it
    let (log_tx, log_rx) = crossbeam_channel::unbounded();
    if let Err(e) = log_collector::init(log_tx) {
        eprintln!("[Main] WARNING: logger registration failed: {}", e);
    }
    log::info!("benchrig {} starting", benchrig::VERSION);

    let settings = SettingsManager::load();
    let app = BenchApp::new(settings, Some(log_rx));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native("benchrig", options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| BenchError::Display(e.to_string()))
}
