use eframe::egui;

/// Dark dashboard design system.
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(10, 12, 16);
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(10, 12, 16);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(22, 27, 34);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(15, 18, 24);

    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(41, 121, 255);

    // Status. Rising prices flag danger on a staples dashboard.
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 230, 118);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 23, 68);

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 246, 252);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(100);

    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);

    // --- Metrics ---

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals
    }

    /// YlOrRd continuous scale for the choropleth, `t` in `[0, 1]`.
    pub fn heat_color(t: f64) -> egui::Color32 {
        const STOPS: [(f32, f32, f32); 5] = [
            (255.0, 255.0, 178.0),
            (254.0, 204.0, 92.0),
            (253.0, 141.0, 60.0),
            (227.0, 26.0, 28.0),
            (128.0, 0.0, 38.0),
        ];

        let t = t.clamp(0.0, 1.0) as f32;
        let scaled = t * (STOPS.len() - 1) as f32;
        let i = (scaled.floor() as usize).min(STOPS.len() - 2);
        let f = scaled - i as f32;

        let (r0, g0, b0) = STOPS[i];
        let (r1, g1, b1) = STOPS[i + 1];
        egui::Color32::from_rgb(
            (r0 + (r1 - r0) * f) as u8,
            (g0 + (g1 - g0) * f) as u8,
            (b0 + (b1 - b0) * f) as u8,
        )
    }
}
