use anyhow::Result;
use clap::Parser;
use console::style;

use webp_batch::cli::Args;
use webp_batch::utils::{format_duration, verbose_println, warn_println};
use webp_batch::ProcessingEngine;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.processing_config()?;

    if config.verbose {
        println!("{}", style("Configuration:").bold());
        println!("  Directory: {}", config.input_dir.display());
        println!("  Extensions: {:?}", config.extensions);
        println!();
    }

    let verbose = config.verbose;
    let engine = ProcessingEngine::new(config)?;

    let summary = engine.run(|event| println!("{}", event))?;

    if summary.converted.is_empty() && verbose {
        warn_println("No PNG or JPEG images found");
    }

    verbose_println(
        verbose,
        &format!(
            "Converted {} images in {} (average {}), {} entries skipped",
            summary.converted_count(),
            format_duration(summary.total_duration),
            format_duration(summary.average_duration()),
            summary.skipped
        ),
    );

    Ok(())
}
