pub const BRAND_NAME: &str = "Tomo";

/// Outbound booking page behind every "Join the Beta" control.
pub const BETA_SIGNUP_URL: &str = "https://cal.hellotomo.ai/welcome";

pub const DEMO_VIDEO_URL: &str = "https://youtu.be/U--ZNq4RNrI?si=oRh9zvvHnV7PdAQm";

pub const LOGO_SRC: &str = "/Tomo_FileFormats-02.png";
pub const DEMO_THUMBNAIL_SRC: &str = "/video thumbnail.jpg";
pub const SCREENSHOT_SRC: &str = "/Ask_Tomo_example.png";

/// Background layers for the hero, first match wins. The gradient is the
/// fallback when neither image is deployed.
pub const HERO_BACKGROUND: &str = "url('/hero-bg.jpg'), url('/hero-bg.jpeg'), radial-gradient(circle at 50% 40%, rgba(255,137,0,0.18) 0%, rgba(255,0,85,0.12) 40%, rgba(0,0,0,0.08) 100%)";

pub const CONTACT_EMAIL: &str = "hello@hellotomo.ai";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_links_are_https() {
        assert!(BETA_SIGNUP_URL.starts_with("https://"));
        assert!(DEMO_VIDEO_URL.starts_with("https://"));
    }

    #[test]
    fn hero_background_ends_with_gradient_fallback() {
        let last = HERO_BACKGROUND.rsplit("), ").next().unwrap_or_default();
        assert!(last.starts_with("radial-gradient("));
    }
}
