use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Outcome of converting one file
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub duration: Duration,
}

/// Totals for a finished batch run
#[derive(Debug)]
pub struct BatchSummary {
    pub converted: Vec<ConversionResult>,
    /// Directory entries that were not qualifying image files
    pub skipped: usize,
    pub total_duration: Duration,
}

impl BatchSummary {
    pub fn converted_count(&self) -> usize {
        self.converted.len()
    }

    /// Average conversion time per file, zero when nothing was converted
    pub fn average_duration(&self) -> Duration {
        if self.converted.is_empty() {
            Duration::new(0, 0)
        } else {
            self.total_duration / self.converted.len() as u32
        }
    }
}

/// Progress tracking across a sequential batch
pub struct BatchProcessor {
    pub total_files: usize,
    processed_count: usize,
    start_time: Instant,
}

impl BatchProcessor {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            processed_count: 0,
            start_time: Instant::now(),
        }
    }

    /// Increment processed count and return current count
    pub fn increment(&mut self) -> usize {
        self.processed_count += 1;
        self.processed_count
    }

    /// Get current progress (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        if self.total_files == 0 {
            1.0
        } else {
            (self.processed_count as f64) / (self.total_files as f64)
        }
    }

    /// Close out the run into a summary
    pub fn finish(self, converted: Vec<ConversionResult>, skipped: usize) -> BatchSummary {
        BatchSummary {
            converted,
            skipped,
            total_duration: self.start_time.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str) -> ConversionResult {
        ConversionResult {
            input_path: PathBuf::from(format!("{}.png", name)),
            output_path: PathBuf::from(format!("{}.webp", name)),
            width: 1,
            height: 1,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_batch_processor_progress() {
        let mut processor = BatchProcessor::new(4);

        assert_eq!(processor.progress(), 0.0);

        assert_eq!(processor.increment(), 1);
        assert!((processor.progress() - 0.25).abs() < 0.01);

        for _ in 0..3 {
            processor.increment();
        }
        assert!((processor.progress() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_batch_is_complete() {
        let processor = BatchProcessor::new(0);
        assert_eq!(processor.progress(), 1.0);

        let summary = processor.finish(Vec::new(), 3);
        assert_eq!(summary.converted_count(), 0);
        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.average_duration(), Duration::new(0, 0));
    }

    #[test]
    fn test_summary_average_duration() {
        let summary = BatchSummary {
            converted: vec![result("a"), result("b")],
            skipped: 0,
            total_duration: Duration::from_secs(10),
        };
        assert_eq!(summary.converted_count(), 2);
        assert_eq!(summary.average_duration(), Duration::from_secs(5));
    }
}
