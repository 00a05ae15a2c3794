use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::UserTypeFilter;
use crate::data::model::UserType;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: the single user-type dropdown plus a
/// per-category breakdown of the loaded data.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.strong("Choose a user type");
    let mut selected = state.filter;
    egui::ComboBox::from_id_salt("user_type")
        .selected_text(selected.label())
        .show_ui(ui, |ui: &mut Ui| {
            for option in UserTypeFilter::OPTIONS {
                ui.selectable_value(&mut selected, option, option.label());
            }
        });
    state.set_filter(selected);

    ui.separator();

    for user_type in UserType::ALL {
        let text = format!("{user_type}: {}", dataset.count_of(user_type));
        ui.label(RichText::new(text).color(state.colors.color_for(user_type)));
    }
    ui.label(format!("Total: {}", dataset.len()));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.force_reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(dataset) = &state.dataset {
            ui.label(format!(
                "{} trips loaded, {} visible",
                dataset.len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open trip data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_source(&path);
    }
}
