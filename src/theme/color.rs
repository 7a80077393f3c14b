use std::fmt;

/// An sRGB color with alpha, as decoded from the preference hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// The documented fallback for anything that is not a valid hex color.
    pub const OPAQUE_BLACK: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Decode a hex color string.
    ///
    /// `#` characters are stripped first. Six digits decode as `RRGGBB` with
    /// full alpha; eight digits decode as `AARRGGBB`. Any other length, or
    /// input that is not hex at all, decodes to opaque black — a degraded
    /// value rather than a failure, so this never errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use guidebook_engine::theme::color::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("#FF0000"), Rgba::new(255, 0, 0, 255));
    /// assert_eq!(Rgba::from_hex("80FF0000"), Rgba::new(255, 0, 0, 128));
    /// assert_eq!(Rgba::from_hex("#FFF"), Rgba::OPAQUE_BLACK);
    /// ```
    pub fn from_hex(hex: &str) -> Rgba {
        let digits = hex.replace('#', "");
        let value = match u32::from_str_radix(&digits, 16) {
            Ok(value) => value,
            Err(_) => return Self::OPAQUE_BLACK,
        };
        match digits.len() {
            6 => Rgba {
                r: (value >> 16) as u8,
                g: (value >> 8) as u8,
                b: value as u8,
                a: 255,
            },
            8 => Rgba {
                a: (value >> 24) as u8,
                r: (value >> 16) as u8,
                g: (value >> 8) as u8,
                b: value as u8,
            },
            _ => Self::OPAQUE_BLACK,
        }
    }

    /// Encode as uppercase `#RRGGBB`. Alpha is dropped, matching how the
    /// preference strings were always written.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
