pub const WINDOW_WIDTH: i32 = 800;           // Width of the window
pub const WINDOW_HEIGHT: i32 = 450;          // Height of the window
pub const FPS: u32 = 60;                     // Frames per second

pub const TRANSITION_DURATION: f32 = 0.25;   // Duration of a card advance (seconds)
pub const BLEND_DURATION: f32 = 0.75;        // Duration of a background blend (seconds)

pub const CARD_WIDTH: f32 = 100.0;           // Unscaled card width
pub const CARD_HEIGHT: f32 = 150.0;          // Unscaled card height
pub const CARD_PADDING: f32 = 12.0;          // 7 cards on screen + 1 for the final space (100 / 8)
pub const CARD_SHIFT_X: f32 = -335.0;        // 14 cards but only 7 on screen, shift left to center
pub const CARD_BASELINE_Y: f32 = 280.0;      // Top of an unscaled card
pub const FIRST_VISIBLE: usize = 2;          // Lowest logical index drawn
pub const LAST_VISIBLE: usize = 9;           // Highest logical index drawn

pub const CARD_ROUNDNESS: f32 = 0.25;
pub const CARD_SEGMENTS: i32 = 15;
pub const CARD_MIN_SCALE: f32 = 0.5;         // Floor for the border/alpha factor
pub const CARD_LABEL_SIZE: i32 = 14;

pub const TITLE_SIZE: i32 = 20;
pub const TITLE_Y: i32 = 20;
pub const PANEL_X: i32 = 50;
pub const PANEL_Y: i32 = 80;
pub const PANEL_LINE: i32 = 30;
pub const PANEL_TEXT_SIZE: i32 = 20;

pub const DEFAULT_LATITUDE: f64 = 41.837;    // Chicago, IL
pub const DEFAULT_LONGITUDE: f64 = -87.685;
pub const DEFAULT_OFFICE: &str = "Chicago, IL (LOT)";
pub const DEFAULT_FORECAST_FILE: &str = "forecast.json";
