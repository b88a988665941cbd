//! WhatsApp contact links
//!
//! The contact buttons spread conversations across the team's numbers by
//! picking one at random each time a link is built.

/// Numbers answering the site's WhatsApp contact
pub const WHATSAPP_NUMBERS: [&str; 2] = ["5533991585259", "5533991178717"];

const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Deep link opening a chat with `phone`
pub fn whatsapp_url(phone: &str) -> String {
    format!("{}?phone={}", WHATSAPP_SEND_URL, phone)
}

/// Pick the number for a random draw, uniformly over `WHATSAPP_NUMBERS`
pub fn pick_number(draw: u32) -> &'static str {
    WHATSAPP_NUMBERS[draw as usize % WHATSAPP_NUMBERS.len()]
}

/// Deep link to a randomly chosen number
///
/// Falls back to the first number if the platform has no entropy source.
pub fn random_whatsapp_url() -> String {
    let mut bytes = [0u8; 4];
    let draw = match getrandom::getrandom(&mut bytes) {
        Ok(()) => u32::from_le_bytes(bytes),
        Err(err) => {
            log::warn!("No randomness available for WhatsApp link: {}", err);
            0
        }
    };
    whatsapp_url(pick_number(draw))
}
