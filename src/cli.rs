use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::image_processing::ProcessingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "webp-batch",
    about = "Convert the PNG and JPEG images of a directory to WebP",
    long_about = "
Batch WebP converter

Every PNG or JPEG file directly inside the target directory (extensions
.png, .jpg, .jpeg in any case) is decoded and written back next to the
original as a WebP file with the same base name. Originals are never
touched; existing .webp files with the same name are overwritten.

Subdirectories are not visited. The first file that fails to convert
stops the whole run.

Example Usage:
  # Convert everything in the current directory
  webp-batch

  # Convert a specific directory and show extra diagnostics
  webp-batch ~/Pictures/mentors --verbose"
)]
pub struct Args {
    /// Directory to convert (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// The directory to process, falling back to the process's working directory
    pub fn input_dir(&self) -> Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Cannot determine current directory"),
        }
    }

    pub fn processing_config(&self) -> Result<ProcessingConfig> {
        let mut config = ProcessingConfig::new(self.input_dir()?);
        config.verbose = self.verbose;
        Ok(config)
    }
}


// Default implementation for tests
#[cfg(test)]
impl Default for Args {
    fn default() -> Self {
        Self {
            directory: None,
            verbose: false,
        }
    }
}
