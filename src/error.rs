//! # Error taxonomy
//!
//! Typed errors surfaced by the steganographic codec. End-of-stream is not
//! an error: exhausted readers and writers report `Ok(0)` through the
//! standard I/O traits instead.

use image::ColorType;
use thiserror::Error;

/// Errors that can occur while constructing or using a [`crate::stego::Carrier`].
#[derive(Debug, Error)]
pub enum StegoError {
    /// The decoded raster's pixel format has no channel layout in the codec.
    /// The caller must convert the image to 8-bit RGBA or 8-bit grayscale
    /// before it can serve as a carrier.
    #[error("unsupported pixel layout {0:?}: only RGBA and grayscale rasters can carry a payload")]
    UnsupportedLayout(ColorType),

    /// The raster has fewer eligible channel bytes than the 32-bit length
    /// header needs, so not a single payload byte could ever be stored.
    #[error("carrier of {pixels} pixels is too small to hold the 32-bit length header")]
    CarrierTooSmall { pixels: usize },

    /// The payload does not fit the carrier. Checked by callers before
    /// streaming; the writer itself truncates instead of failing.
    #[error("payload of {needed} bytes exceeds the carrier capacity of {capacity} bytes")]
    CapacityExceeded { needed: usize, capacity: usize },
}
