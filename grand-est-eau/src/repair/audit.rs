//! Détection du mojibake résiduel
//!
//! Une chaîne encore corrompue redevient de l'UTF-8 valide une fois
//! ré-encodée en Windows-1252. Une chaîne correcte contenant des accents
//! donne au contraire des octets Latin isolés, invalides en UTF-8.

use encoding_rs::WINDOWS_1252;

/// Vrai si `value` ressemble à de l'UTF-8 relu en Windows-1252
pub fn looks_double_encoded(value: &str) -> bool {
    if value.is_ascii() {
        return false;
    }

    let (bytes, _, had_errors) = WINDOWS_1252.encode(value);
    if had_errors {
        return false;
    }

    // Au moins une séquence multi-octets reconstituée
    !bytes.is_ascii() && simdutf8::basic::from_utf8(&bytes).is_ok()
}
