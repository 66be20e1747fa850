//! Hologram theme for the globe widget
//!
//! Cyan wireframes over a fully transparent surface, with a violet accent
//! for the grid.

use egui::Color32;

pub mod colors {
    use super::Color32;

    pub const GLOBE_CYAN: Color32 = Color32::from_rgb(0, 255, 255); // #00FFFF
    pub const GRID_VIOLET: Color32 = Color32::from_rgb(138, 43, 226); // #8A2BE2
    pub const POINT_BLUE: Color32 = Color32::from_rgb(0, 191, 255); // #00BFFF
}

/// Convert a scene color + opacity into a premultiplied-free egui color.
pub fn rgba(color: [u8; 3], opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(color[0], color[1], color[2], alpha)
}

/// Visuals for a widget that floats over the host page: everything
/// transparent, no chrome, no shadows.
pub fn hologram_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_fill = Color32::TRANSPARENT;
    visuals.extreme_bg_color = Color32::TRANSPARENT;
    visuals.faint_bg_color = Color32::TRANSPARENT;

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_scales_alpha() {
        let c = rgba([0, 255, 255], 0.5);
        assert_eq!(c.r(), 0);
        assert_eq!(c.g(), 255);
        assert_eq!(c.a(), 127);
    }

    #[test]
    fn rgba_clamps_opacity() {
        assert_eq!(rgba([10, 20, 30], 2.0).a(), 255);
        assert_eq!(rgba([10, 20, 30], -1.0).a(), 0);
    }

    #[test]
    fn visuals_are_transparent() {
        let visuals = hologram_visuals();
        assert_eq!(visuals.panel_fill, Color32::TRANSPARENT);
        assert_eq!(visuals.window_fill, Color32::TRANSPARENT);
    }
}
