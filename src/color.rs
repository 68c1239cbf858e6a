//! Color type and channel constants.
//!
//! The crate uses the `smart-leds` 8-bit RGB type throughout, so channel
//! values are structurally confined to 0-255.

use smart_leds::RGB8;

/// 8-bit RGB color, one byte per channel.
pub type Rgb = RGB8;

/// All channels off.
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Full red.
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Full green.
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

/// Full blue.
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

/// All channels on.
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
