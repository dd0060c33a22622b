//! Command line surface of the `play-icon` binary.

use crate::{config::IconConfig, generator::generate_icon, rounder::round_icon};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{ffi::OsString, path::PathBuf};

pub const GENERATE_USAGE: &str = "Usage: play-icon generate <output_path>";
pub const PROCESS_USAGE: &str = "Usage: play-icon process <input_path> <output_path>";

#[derive(Debug, Parser)]
#[clap(
    name = "play-icon",
    about = "Draw a rounded-square play icon, or round an existing image into one"
)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw an amber rounded-square icon with a play glyph.
    Generate {
        /// Where to write the PNG.
        #[clap(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Ignored.
        #[clap(hide = true)]
        extra: Vec<OsString>,
    },

    /// Resize an image and cut it into a transparent rounded-square icon.
    Process {
        /// Source image (any format the image crate can decode).
        #[clap(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Where to write the PNG.
        #[clap(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Ignored.
        #[clap(hide = true)]
        extra: Vec<OsString>,
    },
}

/// Run one command. Missing paths print a usage line and do nothing.
pub fn run(args: Args) -> Result<()> {
    let config = IconConfig::default();

    match args.command {
        Some(Command::Generate {
            output: Some(output),
            ..
        }) => generate_icon(&output, &config)
            .with_context(|| format!("Error generating icon at {}", output.display())),
        Some(Command::Generate { output: None, .. }) => {
            println!("{GENERATE_USAGE}");
            Ok(())
        }
        Some(Command::Process {
            input: Some(input),
            output: Some(output),
            ..
        }) => round_icon(&input, &output, &config)
            .with_context(|| format!("Error processing icon {}", input.display())),
        Some(Command::Process { .. }) => {
            println!("{PROCESS_USAGE}");
            Ok(())
        }
        None => {
            println!("{GENERATE_USAGE}");
            println!("{PROCESS_USAGE}");
            Ok(())
        }
    }
}
