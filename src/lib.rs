// Library exports for reuse by the binary and integration tests
pub mod cli;
pub mod error;
pub mod image_processing;
pub mod utils;

// Re-export commonly used types
pub use error::ConvertError;
pub use image_processing::{
    BatchSummary, ConversionEvent, ConversionResult, ProcessingConfig, ProcessingEngine,
};
