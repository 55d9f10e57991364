use std::time::Duration;

use log::Level;

use crate::inquiry::{InquirySettings, SubmitMode};
use crate::slideshow::ImageRef;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const ACKNOWLEDGE_DWELL: Duration = Duration::from_millis(3000);
pub const SLIDE_PERIOD: Duration = Duration::from_millis(5000);

pub const HERO_IMAGES: &[&str] = &[
    "/images/hero-1.jpg",
    "/images/hero-2.jpg",
    "/images/exterior-1.jpg",
    "/images/exterior-2.jpg",
];

/// Shown alone when the slideshow cannot start.
pub const FALLBACK_HERO_IMAGE: &str = "/images/hero-1.jpg";

pub fn hero_images() -> Vec<ImageRef> {
    HERO_IMAGES
        .iter()
        .enumerate()
        .map(|(i, src)| {
            ImageRef::new(*src, format!("Aboveground Construction Project {}", i + 1))
        })
        .collect()
}

pub fn log_level() -> Level {
    parse_log_level(option_env!("ABOVEGROUND_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|raw| raw.parse().ok()).unwrap_or(Level::Info)
}

/// Set `ABOVEGROUND_INQUIRY_ENDPOINT` at build time to send inquiries to the backend.
pub fn submit_mode() -> SubmitMode {
    submit_mode_for(option_env!("ABOVEGROUND_INQUIRY_ENDPOINT"), get_backend_url())
}

fn submit_mode_for(endpoint: Option<&str>, backend: &str) -> SubmitMode {
    match endpoint.map(str::trim) {
        Some(path) if !path.is_empty() => SubmitMode::Remote {
            endpoint: format!("{}{}", backend, path),
        },
        _ => SubmitMode::Simulated,
    }
}

pub fn inquiry_settings() -> InquirySettings {
    InquirySettings {
        mode: submit_mode(),
        dwell: ACKNOWLEDGE_DWELL,
        require_email_format: option_env!("ABOVEGROUND_STRICT_EMAIL").is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_switches_to_remote_delivery() {
        assert_eq!(submit_mode_for(None, "http://localhost:3001"), SubmitMode::Simulated);
        assert_eq!(submit_mode_for(Some("  "), ""), SubmitMode::Simulated);
        assert_eq!(
            submit_mode_for(Some("/api/inquiries"), "http://localhost:3001"),
            SubmitMode::Remote {
                endpoint: "http://localhost:3001/api/inquiries".into()
            }
        );
    }

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(parse_log_level(None), Level::Info);
        assert_eq!(parse_log_level(Some("debug")), Level::Debug);
        assert_eq!(parse_log_level(Some("chatty")), Level::Info);
    }

    #[test]
    fn hero_images_are_labelled_in_order() {
        let images = hero_images();
        assert_eq!(images.len(), HERO_IMAGES.len());
        assert_eq!(images[2].alt, "Aboveground Construction Project 3");
    }
}
