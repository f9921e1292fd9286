use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a batch run
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("cannot read directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("not a directory: {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode WebP image {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ConvertError {
    /// The file or directory the error occurred at.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::ReadDir { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::InvalidInput(path) => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_path() {
        let err = ConvertError::InvalidInput(PathBuf::from("missing"));
        assert_eq!(err.path(), &PathBuf::from("missing"));
        assert_eq!(err.to_string(), "not a directory: missing");
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let err = ConvertError::Decode {
            path: PathBuf::from("bad.png"),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "gone",
            )),
        };
        assert_eq!(err.to_string(), "failed to decode image bad.png");
        assert!(std::error::Error::source(&err).is_some());
    }
}
