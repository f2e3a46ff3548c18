//! Packed 32-bit pixel codec.
//!
//! A [`PixelFormat`] is built once from four channel masks. The bit shift of
//! each channel is derived from its mask rather than hard-coded, so the same
//! codec serves any native channel ordering. Formats are plain values: build
//! one per render target and pass it to every encode/decode call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::SolidColor;
use crate::error::PixelFormatError;

/// One channel of a packed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Alpha => "alpha",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

/// Bit masks selecting each channel inside a `u32` pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMasks {
    pub alpha: u32,
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl ChannelMasks {
    /// `0xAARRGGBB` as a `u32` value.
    pub const ARGB8888: Self = Self {
        alpha: 0xff00_0000,
        red: 0x00ff_0000,
        green: 0x0000_ff00,
        blue: 0x0000_00ff,
    };

    /// Bytes R, G, B, A in memory when the word is stored little-endian.
    pub const RGBA8888_LE: Self = Self {
        alpha: 0xff00_0000,
        red: 0x0000_00ff,
        green: 0x0000_ff00,
        blue: 0x00ff_0000,
    };

    fn by_channel(&self) -> [(Channel, u32); 4] {
        [
            (Channel::Alpha, self.alpha),
            (Channel::Red, self.red),
            (Channel::Green, self.green),
            (Channel::Blue, self.blue),
        ]
    }
}

impl Default for ChannelMasks {
    fn default() -> Self {
        Self::ARGB8888
    }
}

/// Bit position of the lowest bit of each channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelShifts {
    pub alpha: u32,
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

/// Derive per-channel shifts from masks.
///
/// Each mask must be a non-zero, contiguous 8-bit field, and no two masks
/// may share a bit.
pub fn derive_shifts(masks: &ChannelMasks) -> Result<ChannelShifts, PixelFormatError> {
    let channels = masks.by_channel();
    let mut shifts = [0u32; 4];

    for (slot, &(channel, mask)) in shifts.iter_mut().zip(channels.iter()) {
        if mask == 0 {
            return Err(PixelFormatError::ZeroMask { channel });
        }
        let shift = mask.trailing_zeros();
        if mask >> shift != 0xff {
            return Err(PixelFormatError::NotByteField { channel, mask });
        }
        *slot = shift;
    }

    for (i, &(first, first_mask)) in channels.iter().enumerate() {
        for &(second, second_mask) in &channels[i + 1..] {
            if first_mask & second_mask != 0 {
                return Err(PixelFormatError::Overlap { first, second });
            }
        }
    }

    let [alpha, red, green, blue] = shifts;
    Ok(ChannelShifts {
        alpha,
        red,
        green,
        blue,
    })
}

/// A validated packed pixel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    masks: ChannelMasks,
    shifts: ChannelShifts,
}

impl PixelFormat {
    /// `0xAARRGGBB`, the layout most desktop framebuffers use.
    pub const ARGB8888: Self = Self {
        masks: ChannelMasks::ARGB8888,
        shifts: ChannelShifts {
            alpha: 24,
            red: 16,
            green: 8,
            blue: 0,
        },
    };

    /// Matches `peniko::Format::Rgba8` once written out with `to_le_bytes`.
    pub const RGBA8888_LE: Self = Self {
        masks: ChannelMasks::RGBA8888_LE,
        shifts: ChannelShifts {
            alpha: 24,
            red: 0,
            green: 8,
            blue: 16,
        },
    };

    pub fn new(masks: ChannelMasks) -> Result<Self, PixelFormatError> {
        let shifts = derive_shifts(&masks)?;
        log::debug!(
            "pixel format: a<<{} r<<{} g<<{} b<<{}",
            shifts.alpha,
            shifts.red,
            shifts.green,
            shifts.blue
        );
        Ok(Self { masks, shifts })
    }

    pub fn masks(&self) -> ChannelMasks {
        self.masks
    }

    pub fn shifts(&self) -> ChannelShifts {
        self.shifts
    }

    /// Pack a color. Each channel is truncated, not rounded, to 8 bits.
    pub fn encode(&self, color: SolidColor) -> u32 {
        let s = &self.shifts;
        (quantize(color.r()) << s.red)
            | (quantize(color.g()) << s.green)
            | (quantize(color.b()) << s.blue)
            | (quantize(color.a()) << s.alpha)
    }

    /// Unpack a pixel into 0.0–1.0 channels.
    pub fn decode(&self, pixel: u32) -> SolidColor {
        let s = &self.shifts;
        let channel = |shift: u32| f64::from((pixel >> shift) & 0xff) / 255.0;
        SolidColor::from_rgba(
            channel(s.red),
            channel(s.green),
            channel(s.blue),
            channel(s.alpha),
        )
    }
}

fn quantize(c: f64) -> u32 {
    u32::from((c * 255.0) as u8)
}
