//! Constants Module - Single Source of Truth
//!
//! Every default, environment variable name and built-in question used
//! across the service is defined here.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "Store Audit";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// SERVER DEFAULTS
// ============================================

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable: bind host
pub const ENV_HOST: &str = "AUDIT_HOST";

/// Environment variable: bind port (platform-provided, checked first)
pub const ENV_PLATFORM_PORT: &str = "PORT";

/// Environment variable: bind port
pub const ENV_PORT: &str = "AUDIT_PORT";

/// Environment variable: debug toggle
pub const ENV_DEBUG: &str = "AUDIT_DEBUG";

/// Environment variable: path to a JSON question file
pub const ENV_QUESTIONS_FILE: &str = "AUDIT_QUESTIONS_FILE";

// ============================================
// FORM FIELDS
// ============================================

/// Form field carrying the store name
pub const FIELD_STORE_NAME: &str = "store_name";

/// The only answer value that earns points
pub const YES_ANSWER: &str = "yes";

/// Answer value rendered for the negative choice
pub const NO_ANSWER: &str = "no";

// ============================================
// BUILT-IN QUESTION SET
// ============================================

/// Built-in audit checklist: (id, text, points)
pub const DEFAULT_QUESTIONS: [(&str, &str, u32); 5] = [
    ("q1", "Mağaza vitrini temiz ve düzenli mi?", 20),
    ("q2", "Personel güler yüzlü ve yardımsever mi?", 25),
    ("q3", "Ürün rafları dolu ve etiketler doğru mu?", 25),
    ("q4", "Mağaza içi genel temizlik yeterli mi?", 15),
    ("q5", "Kasa alanı düzenli ve hızlı mı?", 15),
];

/// Parse a boolean toggle the way operators usually write them
pub fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
