use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TripDeckApp {
    pub state: AppState,
}

impl TripDeckApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for TripDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: user-type filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: filtered trip table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::trip_table(ui, &self.state);
        });
    }
}
