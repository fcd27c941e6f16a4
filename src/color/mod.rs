//! Color types and helpers shared by the segment and animation code.

pub use smart_leds::hsv::hsv2rgb;
use smart_leds::{RGB8, hsv::Hsv as HSV};

use crate::math8::{blend8, scale8};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Fully off pixel.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Faint baseline written by trailing/clearing animation passes.
///
/// Dots sweep over this instead of pure black so the strip keeps a dim glow.
pub const AMBIENT: Rgb = Rgb { r: 10, g: 10, b: 10 };

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Scale every channel of a color toward black (FastLED `nscale8` equivalent)
#[inline]
pub const fn scale_rgb(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Channel-wise complement, used as the contrasting stream color in interleave
#[inline]
pub const fn complement(color: Rgb) -> Rgb {
    Rgb {
        r: 255 - color.r,
        g: 255 - color.g,
        b: 255 - color.b,
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
