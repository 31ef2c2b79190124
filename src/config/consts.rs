// src/config/consts.rs

// Source data
pub const DEFAULT_SOURCE: &str = "data/Louisville_Metro_KY_-_Property_Foreclosures.csv";
pub const SOURCE_SEP: char = ',';

// Local store (debug log lives here)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Textual stand-ins for a missing value, compared case-sensitively
pub const NULL_PLACEHOLDERS: &[&str] = &["<NA>", "nan", "NaN", "None", "null", "NULL"];

// Metrics
pub const NOT_AVAILABLE: &str = "N/A";

// Display
pub const DISPLAY_DATE_FMT: &str = "%m/%d/%Y";

// GUI
pub const APP_TITLE: &str = "Foreclosures in Louisville, KY";
pub const WINDOW_W: f32 = 1280.0;
pub const WINDOW_H: f32 = 820.0;
pub const BAR_COLOR: (u8, u8, u8) = (0x00, 0x83, 0xB8);
pub const CHART_HEIGHT: f32 = 260.0;
