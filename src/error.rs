//! Error types for pixel formats, picker layout and configuration.

use thiserror::Error;

use crate::pixel::Channel;

/// A channel mask set that cannot describe a packed 32-bit pixel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    /// The mask selects no bits at all
    #[error("{channel} channel mask is zero")]
    ZeroMask {
        /// Channel with the empty mask
        channel: Channel,
    },

    /// The mask is not one contiguous 8-bit field
    #[error("{channel} channel mask {mask:#010x} is not a contiguous 8-bit field")]
    NotByteField {
        /// Offending channel
        channel: Channel,
        /// The mask as configured
        mask: u32,
    },

    /// Two channels claim the same bits
    #[error("{first} and {second} channel masks overlap")]
    Overlap {
        /// First channel of the overlapping pair
        first: Channel,
        /// Second channel of the overlapping pair
        second: Channel,
    },
}

/// A picker layout that violates the picker's geometric invariants.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PickerError {
    /// The annulus must have some thickness
    #[error("wheel half-width must be positive and finite, got {0}")]
    NonPositiveHalfWidth(f64),

    /// The annulus must sit at a real distance from the center
    #[error("wheel radius must be positive and finite, got {0}")]
    NonPositiveRadius(f64),

    /// The bounding square must enclose the outer edge of the wheel
    #[error("bound radius {bound_radius_px}px does not enclose the wheel's outer radius {outer_radius}")]
    BoundsTooSmall {
        /// Configured bounding radius
        bound_radius_px: i32,
        /// `wheel_radius + wheel_half_width`
        outer_radius: f64,
    },

    /// The bounding square would start left of or above the display origin
    #[error("picker bounds extend off screen (left={left}, top={top})")]
    OffScreen {
        /// Left edge of the bounding square
        left: i32,
        /// Top edge of the bounding square
        top: i32,
    },

    /// The bounding square does not fit in 32-bit screen coordinates
    #[error("picker bounds around {center:?} with radius {bound_radius_px}px overflow screen coordinates")]
    CoordinateOverflow {
        /// Configured center
        center: (i32, i32),
        /// Configured bounding radius
        bound_radius_px: i32,
    },
}

/// Errors raised while loading a picker configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured channel masks are unusable
    #[error("invalid pixel format: {0}")]
    PixelFormat(#[from] PixelFormatError),

    /// The configured layout is unusable
    #[error("invalid picker layout: {0}")]
    Layout(#[from] PickerError),
}
