//! Hex color parsing and the library's brand colors.
//!
//! Accepts hex strings like `"006736"` or `"#006736"`. Unparseable input
//! falls back to black with the requested alpha.

use keel_types::Rgba;

/// Convert a 6-digit hex string into an [`Rgba`].
///
/// The leading `#` is optional. On parse failure the result is black with
/// the given `alpha`.
pub fn from_hex_str(hex: &str, alpha: f32) -> Rgba {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    match u64::from_str_radix(digits, 16) {
        Ok(value) => Rgba::from_rgb8(
            ((value & 0xff_0000) >> 16) as u8,
            ((value & 0x00_ff00) >> 8) as u8,
            (value & 0x00_00ff) as u8,
            alpha,
        ),
        Err(_) => Rgba::new(0.0, 0.0, 0.0, alpha),
    }
}

/// Primary brand color, a deep green.
pub fn brand_primary() -> Rgba {
    from_hex_str("006736", 1.0)
}

/// Secondary brand color, an off-white.
pub fn brand_secondary() -> Rgba {
    from_hex_str("FCFFFD", 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_parses() {
        assert_eq!(from_hex_str("FF0000", 1.0), Rgba::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_leading_hash_is_stripped() {
        assert_eq!(from_hex_str("#006736", 1.0), brand_primary());
    }

    #[test]
    fn test_malformed_input_falls_back_to_black() {
        let color = from_hex_str("not a color", 0.5);
        assert_eq!(color, Rgba::new(0.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_alpha_passes_through() {
        assert_eq!(from_hex_str("006736", 0.25).a, 0.25);
        assert!(!from_hex_str("006736", 0.25).is_opaque());
    }
}
