use std::path::Path;

use anyhow::Context;
use eframe::egui;

use trip_deck::app::TripDeckApp;
use trip_deck::data::loader::DEFAULT_DATA_PATH;
use trip_deck::state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dashboard cannot start without data: a load failure here aborts
    // with a non-zero exit instead of opening an empty window.
    let state = AppState::startup(Path::new(DEFAULT_DATA_PATH))
        .with_context(|| format!("loading trip data from {DEFAULT_DATA_PATH}"))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Trip Deck – Bike-share Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(TripDeckApp::new(state)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe error: {err}"))
}
