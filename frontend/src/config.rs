use log::Level;

pub const BRAND_NAME: &str = "Dacosta";

/// Vertical offset past which the nav bar switches to its solid treatment.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Share of a section that has to be visible before its reveal fires.
pub const VIEWPORT_THRESHOLD: f64 = 0.1;
pub const VIEWPORT_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Length of the entry gate's fade-out, in milliseconds.
pub const GATE_FADE_MS: u32 = 500;

pub const HERO_BACKGROUND: &str = "/assets/hero-background.png";
pub const LOGO_MARK: &str = "/assets/logo.png";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
