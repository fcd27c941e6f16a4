//! Battery cell charge rendering.
//!
//! Thin consumer of [`Segment`]: maps a charge fraction onto a lit pixel
//! range colored by four fixed charge bands. Owns no animation state.

use libm::floorf;

use crate::color::{Rgb, blend_colors, rgb_from_u32};
use crate::segment::Segment;

/// Band colors for 0% / 25% / 50% / 75% charge thresholds.
const BAND_COLORS: [Rgb; 4] = [
    rgb_from_u32(0x00FF_0000), // red
    rgb_from_u32(0x00FF_FF00), // yellow
    rgb_from_u32(0x0000_FF00), // green
    rgb_from_u32(0x0000_00FF), // blue
];

const BAND_THRESHOLDS: [f32; 4] = [0.0, 0.25, 0.5, 0.75];

/// How the lit range is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStyle {
    /// One color for the whole lit range, chosen by the overall charge.
    Solid,
    /// Each lit pixel colored by the band its own index falls into.
    #[default]
    Stepped,
    /// Lit pixels blend smoothly across the band colors.
    Gradient,
}

/// Charge gauge over one segment.
pub struct ChargeDisplay<'a> {
    segment: Segment<'a>,
    style: DisplayStyle,
    charge: f32,
}

impl<'a> ChargeDisplay<'a> {
    pub fn new(segment: Segment<'a>) -> Self {
        Self {
            segment,
            style: DisplayStyle::default(),
            charge: 0.0,
        }
    }

    /// Current charge fraction in `[0, 1]`.
    pub const fn charge_fraction(&self) -> f32 {
        self.charge
    }

    pub const fn style(&self) -> DisplayStyle {
        self.style
    }

    pub const fn segment(&self) -> &Segment<'a> {
        &self.segment
    }

    /// Update from a raw voltage reading and re-render.
    ///
    /// The fraction is `(millivolts - min) / (max - min)`, clamped to
    /// `[0, 1]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn set_voltage(&mut self, leds: &mut [Rgb], millivolts: i32, min: i32, max: i32) {
        let range = max - min;
        let fraction = if range <= 0 {
            0.0
        } else {
            (millivolts - min) as f32 / range as f32
        };
        self.set_charge(leds, fraction);
    }

    /// Update the charge fraction (clamped to `[0, 1]`) and re-render.
    pub fn set_charge(&mut self, leds: &mut [Rgb], fraction: f32) {
        self.charge = fraction.clamp(0.0, 1.0);
        self.render(leds);
    }

    /// Switch the display style and re-render.
    pub fn set_style(&mut self, leds: &mut [Rgb], style: DisplayStyle) {
        self.style = style;
        self.render(leds);
    }

    /// Number of pixels lit for the current charge.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn lit_count(&self) -> usize {
        let len = self.segment.len();
        if len == 0 {
            return 0;
        }
        let lit = floorf(self.charge * len as f32) as usize + 1;
        lit.min(len)
    }

    /// Band color for a charge fraction.
    fn band_color(fraction: f32) -> Rgb {
        let mut color = BAND_COLORS[0];
        for (threshold, band) in BAND_THRESHOLDS.iter().zip(BAND_COLORS.iter()) {
            if fraction >= *threshold {
                color = *band;
            }
        }
        color
    }

    /// Sample a smooth blend across the band colors at `t` (0-255).
    #[allow(clippy::cast_possible_truncation)]
    fn sample_bands(t: u8) -> Rgb {
        let segments = BAND_COLORS.len() - 1;
        let scaled = u16::from(t) * (segments as u16);
        let segment = ((scaled >> 8) as usize).min(segments - 1);
        let local_t = (scaled & 0xFF) as u8;

        blend_colors(BAND_COLORS[segment], BAND_COLORS[segment + 1], local_t)
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn render(&self, leds: &mut [Rgb]) {
        self.segment.clear(leds);

        let len = self.segment.len();
        let lit = self.lit_count();

        match self.style {
            DisplayStyle::Solid => {
                let color = Self::band_color(self.charge);
                for i in 0..lit {
                    self.segment.set_px(leds, i, color);
                }
            }
            DisplayStyle::Stepped => {
                for i in 0..lit {
                    let color = Self::band_color(i as f32 / len as f32);
                    self.segment.set_px(leds, i, color);
                }
            }
            DisplayStyle::Gradient => {
                let span = lit.saturating_sub(1).max(1);
                for i in 0..lit {
                    let t = ((i * 255) / span) as u8;
                    self.segment.set_px(leds, i, Self::sample_bands(t));
                }
            }
        }
    }
}
