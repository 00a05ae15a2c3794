use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::UserType;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: rider category → Color32
// ---------------------------------------------------------------------------

/// One colour per rider category, used to tint user-type cells and the
/// per-category counts in the side panel.
#[derive(Debug, Clone)]
pub struct UserTypeColors {
    colors: [Color32; UserType::ALL.len()],
}

impl Default for UserTypeColors {
    fn default() -> Self {
        let palette = generate_palette(UserType::ALL.len());
        let mut colors = [Color32::GRAY; UserType::ALL.len()];
        for (slot, color) in colors.iter_mut().zip(palette) {
            *slot = color;
        }
        Self { colors }
    }
}

impl UserTypeColors {
    pub fn color_for(&self, user_type: UserType) -> Color32 {
        let index = UserType::ALL
            .iter()
            .position(|candidate| *candidate == user_type)
            .unwrap_or(0);
        self.colors[index]
    }
}
