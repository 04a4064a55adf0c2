//! # Command handling logic module
//!
//! High-level business logic for the `hide` and `recover` subcommands.
//! This module coordinates file I/O, drives the steganographic carrier,
//! and reports the outcome to the user.

use crate::cli::{HideArgs, RecoverArgs};
use crate::constants::COPY_BUF_SIZE;
use crate::stego::Carrier;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Handles execution of the 'hide' command.
///
/// Reads the carrier image and the payload file, checks that the payload
/// fits the carrier's steganographic capacity, streams the payload bytes
/// into the carrier, and saves the doctored image to the destination.
///
/// # Arguments
///
/// * `args` - The `HideArgs` struct with the input/output paths.
///
/// # Errors
///
/// Returns an error if any of the following happens:
/// * The carrier image or payload file cannot be read.
/// * The image's pixel format cannot carry hidden data.
/// * The image does not have enough space to hide the payload.
/// * The destination file exists and `--force` was not given.
/// * The doctored image cannot be written.
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to open carrier image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = fs::read(&args.payload).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.payload.to_string_lossy().red().bold()
        )
    })?;

    let mut carrier = Carrier::from_image(picture).with_context(|| {
        format!(
            "{} cannot be used as a carrier",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    carrier.ensure_fits(payload.len()).with_context(|| {
        format!(
            "Not enough space in the image to hide the payload. \nRequired: {}, Available: {}",
            payload.len().to_string().red().bold(),
            carrier.capacity().to_string().green().bold()
        )
    })?;

    {
        let mut writer = carrier.writer();
        for chunk in payload.chunks(COPY_BUF_SIZE) {
            writer.write_all(chunk).with_context(|| {
                "The image ran out of eligible pixel bytes before the whole payload was hidden."
            })?;
        }
    }

    let dest = args
        .dest
        .unwrap_or_else(|| default_dest(&args.image, "doctored_", "png"));
    ensure_overwritable(&dest, args.force)?;

    carrier.into_image().save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Handles execution of the 'recover' command.
///
/// Reads the doctored image, drains the carrier's payload reader until it
/// reports exhaustion, and writes the recovered bytes to the destination
/// file.
///
/// # Arguments
///
/// * `args` - The `RecoverArgs` struct with the input/output paths.
///
/// # Errors
///
/// Returns an error if any of the following happens:
/// * The image cannot be read or decoded.
/// * The image's pixel format cannot carry hidden data.
/// * The destination file exists and `--force` was not given.
/// * The recovered bytes cannot be written.
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to open image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let carrier = Carrier::from_image(picture).with_context(|| {
        format!(
            "{} cannot carry hidden data",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let mut reader = carrier.reader();
    let mut payload = Vec::with_capacity(reader.remaining());
    let mut buf = [0u8; COPY_BUF_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        payload.extend_from_slice(&buf[..n]);
    }

    let dest = args
        .dest
        .unwrap_or_else(|| default_dest(&args.image, "recovered_", "bin"));
    ensure_overwritable(&dest, args.force)?;

    fs::write(&dest, payload).with_context(|| {
        format!(
            "Unable to write to target payload file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// Output path used when the user does not name one: the input file's stem
/// with a prefix and a fixed extension, next to the input file.
fn default_dest(image: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("{prefix}{stem}.{extension}"))
}

/// Refuses to clobber an existing file unless `--force` was given.
fn ensure_overwritable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nPass --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}
