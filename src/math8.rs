//! 8-bit integer math helpers.

use crate::color::Rgb;

/// Scale an 8-bit channel by a level (0-255 = 0.0-1.0)
///
/// Exact `value * level / 255` with integer truncation; a zero input stays
/// zero for every level.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, level: u8) -> u8 {
    ((value as u16 * level as u16) / 255) as u8
}

/// Scale every channel of a color by a level
#[inline]
pub const fn scale_rgb(color: Rgb, level: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, level),
        g: scale8(color.g, level),
        b: scale8(color.b, level),
    }
}
