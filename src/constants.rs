/// Width of the in-band length header, in eligible-stream bits.
/// The payload length is stored as a `u32`, one bit per eligible carrier
/// byte, so the payload region always starts at eligible position 32.
pub const HEADER_BITS: usize = 32;

/// Number of carrier bits consumed per payload byte.
pub const BITS_PER_BYTE: usize = 8;

/// Chunk size used by the CLI when streaming payload bytes through a
/// carrier's reader or writer.
pub const COPY_BUF_SIZE: usize = 4096;
