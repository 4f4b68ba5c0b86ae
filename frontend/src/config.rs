use log::Level;

/// Vertical scroll (px) at which the nav bar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Height kept clear above a section when smooth-scrolling to it.
pub const HEADER_OFFSET_PX: f64 = 100.0;

pub const ETL_STEP_INTERVAL_MS: u32 = 2_500;

pub const METRIC_TICK_MS: u32 = 1_500;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
