//! # Command-line interface module
//!
//! Defines the program's command-line structure with `clap`, including the
//! subcommands and their arguments. Every entry point through which a user
//! interacts with the program lives here.

use clap::Parser;
use std::path::PathBuf;

/// An LSB (least significant bit) steganography tool that hides a file's
/// bytes inside a lossless image (such as PNG or BMP) and recovers them.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "An LSB (least significant bit) steganography tool that hides a file's bytes inside a lossless image (such as PNG or BMP) and recovers them later."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands: hide and recover.
#[derive(Parser, Debug)]
pub enum Commands {
    /// Hide a file's bytes inside a lossless image (such as PNG or BMP).
    Hide(HideArgs),

    /// Recover the bytes hidden inside a doctored image.
    Recover(RecoverArgs),
}

/// Arguments for the 'hide' command.
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// Path of the carrier image (such as PNG or BMP) to hide the payload in.
    #[arg(short, long)]
    pub image: PathBuf,

    /// Path of the file whose bytes will be hidden.
    #[arg(short, long)]
    pub payload: PathBuf,

    /// Where to save the doctored image. Defaults to doctored_<image>.png
    /// next to the carrier.
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Overwrite the destination file if it already exists.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the 'recover' command.
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// Path of the image carrying hidden payload bytes.
    #[arg(short, long)]
    pub image: PathBuf,

    /// Where to save the recovered bytes. Defaults to recovered_<image>.bin
    /// next to the image.
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Overwrite the destination file if it already exists.
    #[arg(short, long)]
    pub force: bool,
}
