/// A segment color token, stored as packed `0xAARRGGBB`.
///
/// The slider core never interprets colors; it only carries them from
/// [`Segment`](crate::Segment) to the change notifications so the host can
/// paint each span. The packed layout matches the color ints most mobile
/// hosts already use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent.
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Color = Color(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    /// Opaque red.
    pub const RED: Color = Color(0xFFFF_0000);
    /// Opaque green.
    pub const GREEN: Color = Color(0xFF00_FF00);
    /// Opaque blue.
    pub const BLUE: Color = Color(0xFF00_00FF);

    /// Creates a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Creates a color from four `u8` channels (red, green, blue, alpha).
    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Creates an opaque color from three `u8` channels (red, green, blue).
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 0xFF)
    }

    /// Returns the packed `0xAARRGGBB` value.
    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Returns the channels as `[r, g, b, a]` bytes.
    #[inline]
    pub const fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
            (self.0 >> 24) as u8,
        ]
    }

    /// Converts the color to normalized `[r, g, b, a]` floats for GPU hosts.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.to_rgba_u8().map(|channel| channel as f32 / 255.0)
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

// --- From Conversions ---

impl From<u32> for Color {
    #[inline]
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}
