//! # Steganographic carrier
//!
//! The carrier owns a decoded raster's pixel buffer and hides a byte stream
//! in the least-significant bits of its color channel bytes. A 32-bit
//! length header occupies the first 32 eligible positions; the payload
//! follows, eight eligible positions per byte. Alpha bytes never carry
//! data, so re-encoding the exported raster with any lossless container
//! format preserves the payload bit-for-bit.

mod cursor;
mod header;
mod layout;
mod stream;

pub use layout::{ChannelLayout, capacity};
pub use stream::{PayloadReader, PayloadWriter};

use crate::constants::HEADER_BITS;
use crate::error::StegoError;
use image::{ColorType, DynamicImage, GrayImage, RgbaImage};

/// A raster pixel buffer used to hide a payload.
///
/// Constructed once per decoded image; layout and capacity are fixed from
/// then on. Access follows the borrow rules: any number of concurrent
/// [`PayloadReader`]s may share a carrier, while a [`PayloadWriter`] holds
/// it exclusively, and exporting consumes it. Mutating the buffer while a
/// writer is alive is therefore impossible by construction.
#[derive(Debug)]
pub struct Carrier {
    layout: ChannelLayout,
    pix: Vec<u8>,
    width: u32,
    height: u32,
    capacity: usize,
    payload_len: u32,
}

impl Carrier {
    /// Builds a carrier from a decoded raster.
    ///
    /// 16-bit RGBA and grayscale rasters are normalized down to one byte
    /// per channel here, before any bit is read or written. Rasters in any
    /// other color model are rejected; converting them is the caller's
    /// decision, never a silent fallback.
    ///
    /// # Errors
    ///
    /// * [`StegoError::UnsupportedLayout`] if the pixel format is neither
    ///   RGBA nor single-channel grayscale.
    /// * [`StegoError::CarrierTooSmall`] if the raster cannot even hold
    ///   the length header.
    pub fn from_image(img: DynamicImage) -> Result<Self, StegoError> {
        let img = match img.color() {
            ColorType::Rgba16 => DynamicImage::ImageRgba8(img.to_rgba8()),
            ColorType::L16 => DynamicImage::ImageLuma8(img.to_luma8()),
            _ => img,
        };

        let (layout, width, height, pix) = match img {
            DynamicImage::ImageRgba8(buf) => {
                let (w, h) = buf.dimensions();
                (ChannelLayout::AlphaChannel3, w, h, buf.into_raw())
            }
            DynamicImage::ImageLuma8(buf) => {
                let (w, h) = buf.dimensions();
                (ChannelLayout::NoAlpha1, w, h, buf.into_raw())
            }
            other => return Err(StegoError::UnsupportedLayout(other.color())),
        };

        let pixels = width as usize * height as usize;
        if pixels * layout.bits_per_pixel() < HEADER_BITS {
            return Err(StegoError::CarrierTooSmall { pixels });
        }

        Ok(Carrier {
            layout,
            pix,
            width,
            height,
            capacity: capacity(pixels, layout),
            payload_len: 0,
        })
    }

    /// Channel layout selected from the raster's pixel format.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Maximum payload bytes this carrier advertises.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Payload bytes committed by the most recent writer.
    pub fn payload_len(&self) -> u32 {
        self.payload_len
    }

    /// Fails with [`StegoError::CapacityExceeded`] if a payload of `needed`
    /// bytes cannot be hidden here. Callers run this before streaming;
    /// the writer itself truncates rather than erroring.
    pub fn ensure_fits(&self, needed: usize) -> Result<(), StegoError> {
        if needed > self.capacity {
            return Err(StegoError::CapacityExceeded {
                needed,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Streams the stored payload out of the carrier.
    pub fn reader(&self) -> PayloadReader<'_> {
        PayloadReader::new(self)
    }

    /// Streams a new payload into the carrier, discarding the previous one.
    pub fn writer(&mut self) -> PayloadWriter<'_> {
        PayloadWriter::new(self)
    }

    /// Hands the (possibly mutated) raster back for re-encoding.
    pub fn into_image(self) -> DynamicImage {
        match self.layout {
            ChannelLayout::AlphaChannel3 => {
                RgbaImage::from_raw(self.width, self.height, self.pix)
                    .map(DynamicImage::ImageRgba8)
            }
            ChannelLayout::NoAlpha1 => GrayImage::from_raw(self.width, self.height, self.pix)
                .map(DynamicImage::ImageLuma8),
        }
        .expect("pixel buffer length matches the raster dimensions")
    }

    /// Total eligible positions in this carrier's pixel buffer.
    fn eligible_len(&self) -> usize {
        self.width as usize * self.height as usize * self.layout.bits_per_pixel()
    }

    /// Whole payload bytes the eligible stream can physically hold past
    /// the header. The advertised capacity ignores the header bits, so
    /// the streams bound themselves with this instead of running off the
    /// end of the buffer.
    pub(crate) fn payload_room(&self) -> usize {
        (self.eligible_len() - HEADER_BITS) / 8
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb, Rgba};

    pub(crate) fn rgba_carrier(width: u32, height: u32) -> Carrier {
        let buf = ImageBuffer::from_fn(width, height, |x, y| {
            Rgba([
                ((x * 17) % 256) as u8,
                ((y * 23) % 256) as u8,
                (((x + y) * 31) % 256) as u8,
                255,
            ])
        });
        Carrier::from_image(DynamicImage::ImageRgba8(buf)).unwrap()
    }

    pub(crate) fn gray_carrier(width: u32, height: u32) -> Carrier {
        let buf = ImageBuffer::from_fn(width, height, |x, y| Luma([((x * 7 + y * 13) % 256) as u8]));
        Carrier::from_image(DynamicImage::ImageLuma8(buf)).unwrap()
    }

    #[test]
    fn selects_layout_from_pixel_format() {
        assert_eq!(rgba_carrier(8, 8).layout(), ChannelLayout::AlphaChannel3);
        assert_eq!(gray_carrier(8, 8).layout(), ChannelLayout::NoAlpha1);
    }

    #[test]
    fn derives_capacity_from_pixel_count() {
        assert_eq!(rgba_carrier(4, 4).capacity(), 6);
        assert_eq!(gray_carrier(32, 1).capacity(), 4);
        assert_eq!(rgba_carrier(100, 100).capacity(), 3750);
    }

    #[test]
    fn rejects_unsupported_pixel_formats() {
        let rgb = ImageBuffer::from_pixel(16, 16, Rgb([1u8, 2, 3]));
        let result = Carrier::from_image(DynamicImage::ImageRgb8(rgb));
        assert!(matches!(result, Err(StegoError::UnsupportedLayout(_))));
    }

    #[test]
    fn rejects_carriers_smaller_than_the_header() {
        let tiny = ImageBuffer::from_pixel(5, 5, Luma([0u8]));
        let result = Carrier::from_image(DynamicImage::ImageLuma8(tiny));
        assert!(matches!(
            result,
            Err(StegoError::CarrierTooSmall { pixels: 25 })
        ));
    }

    #[test]
    fn normalizes_wide_samples_at_construction() {
        let buf = ImageBuffer::from_pixel(8, 8, Rgba([0xFFFFu16, 0, 0x8080, 0xFFFF]));
        let carrier = Carrier::from_image(DynamicImage::ImageRgba16(buf)).unwrap();
        assert_eq!(carrier.layout(), ChannelLayout::AlphaChannel3);
        // One byte per channel after normalization.
        assert_eq!(carrier.pix.len(), 8 * 8 * 4);

        let wide_gray = ImageBuffer::from_pixel(8, 8, Luma([0x4242u16]));
        let carrier = Carrier::from_image(DynamicImage::ImageLuma16(wide_gray)).unwrap();
        assert_eq!(carrier.layout(), ChannelLayout::NoAlpha1);
        assert_eq!(carrier.pix.len(), 8 * 8);
    }

    #[test]
    fn ensure_fits_is_an_advisory_bound() {
        let carrier = rgba_carrier(4, 4);
        assert!(carrier.ensure_fits(6).is_ok());
        assert!(matches!(
            carrier.ensure_fits(7),
            Err(StegoError::CapacityExceeded {
                needed: 7,
                capacity: 6,
            })
        ));
    }

    #[test]
    fn survives_an_export_import_cycle() {
        use std::io::{Read, Write};

        let mut carrier = rgba_carrier(8, 8);
        carrier.writer().write_all(b"persist me").unwrap();

        let reloaded = Carrier::from_image(carrier.into_image()).unwrap();
        let mut recovered = Vec::new();
        reloaded.reader().read_to_end(&mut recovered).unwrap();
        assert_eq!(recovered, b"persist me");
    }

    #[test]
    fn reader_bounds_a_corrupt_header_to_the_buffer() {
        use std::io::Read;

        // Forge a header far larger than the carrier could ever hold.
        let mut carrier = gray_carrier(64, 1);
        header::write_len(&mut carrier.pix, carrier.layout, 50_000);

        let mut recovered = Vec::new();
        carrier.reader().read_to_end(&mut recovered).unwrap();
        assert_eq!(recovered.len(), carrier.payload_room());
    }
}
