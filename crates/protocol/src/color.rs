//! Hex color resolution.
//!
//! Both rendering engines resolve item colors through [`resolve`], so a
//! malformed color looks the same everywhere: opaque black.
//!
//! Accepted input is six hex digits, optionally surrounded by whitespace and
//! prefixed with `#`. Alpha channels and short forms (`#FFF`) are rejected.

use std::fmt;

use tracing::debug;

/// An opaque RGB color.
///
/// # Examples
///
/// ```
/// use widget_protocol::Rgb;
///
/// let color = Rgb::new(255, 51, 51);
/// assert_eq!(color.to_hex(), "#FF3333");
/// assert_eq!(Rgb::FALLBACK, Rgb::new(0, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Color substituted for any malformed input: opaque black.
    pub const FALLBACK: Self = Self::new(0, 0, 0);

    /// Accent color of the empty-state row.
    pub const ACCENT: Self = Self::new(0xAA, 0x33, 0xEE);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Resolves a hex string, returning `None` when it is malformed.
///
/// # Examples
///
/// ```
/// use widget_protocol::{Rgb, color::try_resolve};
///
/// assert_eq!(try_resolve(" #ff3333 "), Some(Rgb::new(255, 51, 51)));
/// assert_eq!(try_resolve("zz"), None);
/// ```
#[must_use]
pub fn try_resolve(hex: &str) -> Option<Rgb> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let [_, r, g, b] = u32::from_str_radix(digits, 16).ok()?.to_be_bytes();
    Some(Rgb::new(r, g, b))
}

/// Resolves a hex string, substituting [`Rgb::FALLBACK`] when malformed.
///
/// # Examples
///
/// ```
/// use widget_protocol::{Rgb, color::resolve};
///
/// assert_eq!(resolve("#FF3333"), Rgb::new(255, 51, 51));
/// assert_eq!(resolve("zz"), Rgb::FALLBACK);
/// ```
#[must_use]
pub fn resolve(hex: &str) -> Rgb {
    try_resolve(hex).unwrap_or_else(|| {
        debug!(hex, "invalid color format, using fallback");
        Rgb::FALLBACK
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_with_hash() {
        assert_eq!(resolve("#FF3333"), Rgb::new(255, 51, 51));
    }

    #[test]
    fn resolves_without_hash() {
        assert_eq!(resolve("AA33EE"), Rgb::ACCENT);
    }

    #[test]
    fn resolves_lowercase_and_whitespace() {
        assert_eq!(resolve("\t #0a0B0c\n"), Rgb::new(10, 11, 12));
    }

    #[test]
    fn rejects_short_form() {
        assert_eq!(resolve("#FFF"), Rgb::FALLBACK);
    }

    #[test]
    fn rejects_alpha_channel() {
        assert_eq!(resolve("#80FF3333"), Rgb::FALLBACK);
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(resolve("zz"), Rgb::FALLBACK);
        assert_eq!(resolve("#GG0000"), Rgb::FALLBACK);
    }

    #[test]
    fn rejects_signed_digits() {
        assert_eq!(resolve("+12345"), Rgb::FALLBACK);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(resolve(""), Rgb::FALLBACK);
        assert_eq!(resolve("#"), Rgb::FALLBACK);
    }

    #[test]
    fn display_is_uppercase_hex() {
        assert_eq!(Rgb::new(1, 171, 255).to_hex(), "#01ABFF");
    }
}
