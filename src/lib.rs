//! # pixveil library
//!
//! Core logic of the pixveil LSB steganography tool: a bit-level codec that
//! hides a byte stream in the least-significant bits of a raster's color
//! channels, plus the CLI glue around it.

// Declare all modules contained in the library.

pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod stego;
