pub mod batch;
pub mod convert;

use anyhow::{Context, Result};
use image::GenericImageView;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use crate::error::ConvertError;
use crate::utils::{
    format_duration, is_qualifying_name, validate_inputs, verbose_println, webp_file_name,
};

pub use batch::{BatchProcessor, BatchSummary, ConversionResult};

#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    /// Directory whose direct children are converted
    pub input_dir: PathBuf,
    /// Lowercase extensions, without the dot
    pub extensions: Vec<String>,
    pub verbose: bool,
}

impl ProcessingConfig {
    /// Configuration for converting PNG and JPEG files in `input_dir`
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            extensions: convert::SUPPORTED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            verbose: false,
        }
    }
}

/// Progress notifications emitted while a batch runs.
///
/// `Display` renders the exact line printed for each event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionEvent {
    Started { name: String },
    Finished { name: String, webp_name: String },
}

impl fmt::Display for ConversionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionEvent::Started { name } => write!(f, "Converting {} to WebP...", name),
            ConversionEvent::Finished { name, webp_name } => {
                write!(f, "Converted {} to {}", name, webp_name)
            }
        }
    }
}

pub struct ProcessingEngine {
    config: ProcessingConfig,
}

impl ProcessingEngine {
    pub fn new(config: ProcessingConfig) -> Result<Self> {
        validate_inputs(&config.input_dir, &config.extensions)?;
        Ok(Self { config })
    }

    /// List the qualifying image files directly inside the input directory.
    ///
    /// Returns the files sorted by name together with the number of entries
    /// that were skipped. Subdirectories are never descended into.
    pub fn discover_images(&self) -> Result<(Vec<PathBuf>, usize)> {
        let input_dir = &self.config.input_dir;
        verbose_println(
            self.config.verbose,
            &format!("Scanning directory: {}", input_dir.display()),
        );

        let walker = WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut image_files = Vec::new();
        let mut skipped = 0;

        for entry in walker {
            let entry = entry.map_err(|source| ConvertError::ReadDir {
                path: input_dir.clone(),
                source,
            })?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy();

            // is_file follows symlinks, so a link to a regular file qualifies
            if path.is_file() && is_qualifying_name(&name, &self.config.extensions) {
                image_files.push(path.to_path_buf());
            } else {
                skipped += 1;
            }
        }

        verbose_println(
            self.config.verbose,
            &format!(
                "Found {} image files ({} other entries skipped)",
                image_files.len(),
                skipped
            ),
        );
        Ok((image_files, skipped))
    }

    /// Convert the files one after another, stopping at the first failure.
    ///
    /// Outputs written before the failure stay on disk.
    pub fn process_batch<F>(
        &self,
        image_files: &[PathBuf],
        progress_callback: F,
    ) -> Result<Vec<ConversionResult>>
    where
        F: FnMut(&ConversionEvent),
    {
        let mut processor = BatchProcessor::new(image_files.len());
        self.convert_files(image_files, &mut processor, progress_callback)
    }

    fn convert_files<F>(
        &self,
        image_files: &[PathBuf],
        processor: &mut BatchProcessor,
        mut progress_callback: F,
    ) -> Result<Vec<ConversionResult>>
    where
        F: FnMut(&ConversionEvent),
    {
        let mut results = Vec::with_capacity(image_files.len());

        for image_path in image_files {
            let result = self.process_single_image(image_path, &mut progress_callback)?;
            let count = processor.increment();
            verbose_println(
                self.config.verbose,
                &format!(
                    "Progress: {}/{} ({:.0}%), {}x{} in {}",
                    count,
                    processor.total_files,
                    processor.progress() * 100.0,
                    result.width,
                    result.height,
                    format_duration(result.duration)
                ),
            );
            results.push(result);
        }

        Ok(results)
    }

    /// Convert a single file to a sibling `.webp`
    pub fn process_single_image<F>(
        &self,
        input_path: &Path,
        progress_callback: &mut F,
    ) -> Result<ConversionResult>
    where
        F: FnMut(&ConversionEvent),
    {
        let start = Instant::now();
        let file_name = input_path
            .file_name()
            .with_context(|| format!("Path has no file name: {}", input_path.display()))?;
        let name = file_name.to_string_lossy().into_owned();

        progress_callback(&ConversionEvent::Started { name: name.clone() });

        // Built from the raw OsStr so non-UTF-8 names keep their bytes
        let output_file_name = webp_file_name(file_name);
        let output_path = input_path.with_file_name(&output_file_name);
        let webp_name = output_file_name.to_string_lossy().into_owned();

        // The decoded buffer lives only inside this block
        let (width, height) = {
            let img = convert::decode_image(input_path)
                .with_context(|| format!("Failed to convert {}", name))?;
            convert::encode_webp(&img, &output_path)
                .with_context(|| format!("Failed to convert {}", name))?;
            img.dimensions()
        };

        progress_callback(&ConversionEvent::Finished { name, webp_name });

        Ok(ConversionResult {
            input_path: input_path.to_path_buf(),
            output_path,
            width,
            height,
            duration: start.elapsed(),
        })
    }

    /// Discover and convert everything in the input directory
    pub fn run<F>(&self, progress_callback: F) -> Result<BatchSummary>
    where
        F: FnMut(&ConversionEvent),
    {
        let (image_files, skipped) = self.discover_images()?;
        let mut processor = BatchProcessor::new(image_files.len());
        let converted = self.convert_files(&image_files, &mut processor, progress_callback)?;
        Ok(processor.finish(converted, skipped))
    }
}
