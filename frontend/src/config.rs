use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Vertical offset past which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Share of an element's area that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Stagger between sibling reveals, in milliseconds.
pub const REVEAL_STAGGER_MS: u32 = 150;
/// Slower stagger for the two wide mission/vision cards.
pub const PILLAR_STAGGER_MS: u32 = 200;
/// Faster stagger for the four small trust badges.
pub const BADGE_STAGGER_MS: u32 = 100;

pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_SIZE: (f64, f64) = (5.0, 20.0);
pub const PARTICLE_POSITION: (f64, f64) = (0.0, 100.0);
pub const PARTICLE_DURATION_SECS: (f64, f64) = (4.0, 11.0);
pub const PARTICLE_DELAY_SECS: (f64, f64) = (0.0, 5.0);

pub const BRAND: &str = "Glosiya";
pub const WHATSAPP_NUMBER: &str = "8801742609954";
pub const WHATSAPP_DISPLAY: &str = "01742609954";
pub const CONTACT_EMAIL: &str = "glosiya824@gmail.com";

const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Fills the wa.me chat template, optionally with a prefilled message.
pub fn whatsapp_link(message: Option<&str>) -> String {
    match message {
        Some(text) if !text.is_empty() => format!(
            "https://wa.me/{}?text={}",
            WHATSAPP_NUMBER,
            urlencoding::encode(text)
        ),
        _ => format!("https://wa.me/{}", WHATSAPP_NUMBER),
    }
}

pub fn qr_image_url(data: &str, size_px: u32) -> String {
    format!(
        "{}?size={}x{}&ecc=H&data={}",
        QR_SERVICE,
        size_px,
        size_px,
        urlencoding::encode(data)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_without_message_is_bare() {
        assert_eq!(whatsapp_link(None), "https://wa.me/8801742609954");
        assert_eq!(whatsapp_link(Some("")), "https://wa.me/8801742609954");
    }

    #[test]
    fn whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_link(Some("Hi Glosiya & co")),
            "https://wa.me/8801742609954?text=Hi%20Glosiya%20%26%20co"
        );
    }

    #[test]
    fn qr_url_encodes_payload() {
        let url = qr_image_url("https://wa.me/8801742609954", 220);
        assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=220x220"));
        assert!(url.ends_with("data=https%3A%2F%2Fwa.me%2F8801742609954"));
    }
}
