use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::COLUMNS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Trip table (central panel)
// ---------------------------------------------------------------------------

/// Position of the `user_type` column in [`COLUMNS`].
const USER_TYPE_COLUMN: usize = 12;

/// Render the filtered trip table in the central panel.
pub fn trip_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a trip file to view data  (File → Open…)");
        });
        return;
    };

    ui.heading("Filtered data");
    ui.label(format!("User type is {}", state.filter.label()));
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(36.0), COLUMNS.len())
        .header(20.0, |mut header| {
            for name in COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let trip = &dataset.trips[state.visible_indices[row.index()]];
                for column in 0..COLUMNS.len() {
                    row.col(|ui: &mut Ui| {
                        let text = trip.column_text(column);
                        if column == USER_TYPE_COLUMN {
                            let color = state.colors.color_for(trip.user_type);
                            ui.label(RichText::new(text).color(color));
                        } else {
                            ui.label(text);
                        }
                    });
                }
            });
        });
}
