use thiserror::Error;

use super::Srgb;

/// Failure to parse a textual color representation.
#[derive(Debug, Error)]
pub enum ParseColorError {
    #[error("hex string must be in 3 or 6 digit form: {0:?}")]
    BadLength(String),
    #[error("hex string must start with a '#': {0:?}")]
    MissingMarker(String),
    #[error("hex string must be ASCII: {0:?}")]
    NotAscii(String),
    #[error("invalid hex digit: {0}")]
    BadDigit(#[from] std::num::ParseIntError),
}

/// A color as three 8-bit channels, the form most displays and terminals
/// consume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb255 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb255 {
    /// Construct from integer channels, clamping each into 0..=255.
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Construct from a packed `0xRRGGBB` integer.
    pub fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub fn to_srgb(&self) -> Srgb {
        Srgb::new(
            self.r as crate::Float / 255.0,
            self.g as crate::Float / 255.0,
            self.b as crate::Float / 255.0,
        )
    }

    /// Lowercase 6-digit hex form, e.g. `#ff8000`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// A string that renders as a block of this color on terminals with
    /// true-color support.
    pub fn swatch(&self) -> String {
        format!("\x1b[48:2::{}:{}:{}m \x1b[49m", self.r, self.g, self.b)
    }
}

/// Parses a "html" hex color string, either in the 3 digit "#f0c" or
/// 6 digit "#ff1034" form, case-insensitively.
pub(crate) fn parse_hex(s: &str) -> Result<Srgb, ParseColorError> {
    // Hex digits and the marker are ASCII, so anything else is malformed.
    // Checking up front also keeps the index slicing below on char
    // boundaries.
    if !s.is_ascii() {
        return Err(ParseColorError::NotAscii(s.to_owned()));
    }

    let (digits, factor) = match s.len() {
        7 => (2, 1.0 / 255.0),
        4 => (1, 1.0 / 15.0),
        _ => return Err(ParseColorError::BadLength(s.to_owned())),
    };

    if !s.starts_with('#') {
        return Err(ParseColorError::MissingMarker(s.to_owned()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&s[1 + i * digits..1 + (i + 1) * digits], 16)
            .map(|v| v as crate::Float * factor)
    };

    Ok(Srgb::new(channel(0)?, channel(1)?, channel(2)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_hex_values() {
        for (s, c) in [
            ("#000000", Srgb::new(0.0, 0.0, 0.0)),
            ("#FF0000", Srgb::new(1.0, 0.0, 0.0)),
            ("#00FF00", Srgb::new(0.0, 1.0, 0.0)),
            ("#0000FF", Srgb::new(0.0, 0.0, 1.0)),
            ("#FFFFFF", Srgb::new(1.0, 1.0, 1.0)),
        ] {
            assert_eq!(s.parse::<Srgb>().unwrap(), c);
        }
    }

    #[test]
    fn short_hex_values() {
        for (s, c) in [
            ("#fff", Srgb::new(1.0, 1.0, 1.0)),
            ("#9ff", Srgb::new(0.6, 1.0, 1.0)),
            ("#f9f", Srgb::new(1.0, 0.6, 1.0)),
            ("#ff9", Srgb::new(1.0, 1.0, 0.6)),
            ("#99f", Srgb::new(0.6, 0.6, 1.0)),
            ("#000", Srgb::new(0.0, 0.0, 0.0)),
        ] {
            assert_eq!(s.parse::<Srgb>().unwrap(), c);
        }
    }

    #[test]
    fn short_and_long_forms_agree() {
        assert_eq!(
            "#fff".parse::<Srgb>().unwrap().hex(),
            "#ffffff".parse::<Srgb>().unwrap().hex()
        );
    }

    #[test]
    fn hex_emission_round_trips() {
        for s in ["#ffffff", "#1a1a46", "#666666", "#ff8000", "#000000"] {
            assert_eq!(s.parse::<Srgb>().unwrap().hex(), s);
        }
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(matches!(
            "#ff00".parse::<Srgb>(),
            Err(ParseColorError::BadLength(_))
        ));
        assert!(matches!(
            "ff00000".parse::<Srgb>(),
            Err(ParseColorError::MissingMarker(_))
        ));
        assert!(matches!(
            "#zzzzzz".parse::<Srgb>(),
            Err(ParseColorError::BadDigit(_))
        ));
    }

    #[test]
    fn rejects_multibyte_input() {
        // 7 bytes but only 4 chars; must come back as an error rather than
        // tripping over a char boundary while slicing.
        assert!(matches!(
            "#a\u{1F3A8}x".parse::<Srgb>(),
            Err(ParseColorError::NotAscii(_))
        ));
        assert!(matches!(
            "#ééé".parse::<Srgb>(),
            Err(ParseColorError::NotAscii(_))
        ));
    }

    #[test]
    fn packed_integer_uses_byte_aligned_shifts() {
        let c = Rgb255::from_packed(0x12f034);
        assert_eq!(c, Rgb255::new(0x12, 0xf0, 0x34));
    }

    #[test]
    fn swatch_embeds_channels() {
        assert_eq!(
            Rgb255::new(255, 128, 0).swatch(),
            "\x1b[48:2::255:128:0m \x1b[49m"
        );
    }
}
