use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_SIZE: [f32; 2] = [960., 720.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [640., 480.];

    pub const PLOT_SIZE: f32 = 600.;
    /// Pixels taken out of each plot axis and spread across the cells as gaps.
    pub const CELL_SHRINK: f32 = 40.;
    pub const CELL_STROKE_WIDTH: f32 = 1.;
    pub const CELL_STROKE_COLOR: Color32 = Color32::BLACK;
    pub const HOVER_ALPHA: f32 = 0.5;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 280.;
    pub const TITLE_SIZE: f32 = 20.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const ERROR_COLOR: Color32 = Color32::DARK_RED;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BACKGROUND_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const WIDGET_GAP: f32 = 20.;
    pub const SPEED_STEP: f64 = 0.1;
}
