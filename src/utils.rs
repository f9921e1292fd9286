use anyhow::Result;
use console::style;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::time::Duration;

use crate::error::ConvertError;

/// Extension given to every converted file
pub const WEBP_EXTENSION: &str = "webp";

/// Format duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 60 {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        format!("{}m {}s", mins, secs)
    } else if total_secs > 0 {
        format!("{}.{:03}s", total_secs, millis)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Validate the directory and extension list before a run
pub fn validate_inputs(input_dir: &Path, extensions: &[String]) -> Result<()> {
    if !input_dir.is_dir() {
        return Err(ConvertError::InvalidInput(input_dir.to_path_buf()).into());
    }

    if extensions.is_empty() {
        return Err(anyhow::anyhow!("No valid extensions specified"));
    }

    Ok(())
}

/// Check whether a file name ends with `.<ext>` for one of the given extensions.
///
/// The comparison lowercases the name, so `X.PNG` matches `png`. Extensions
/// are expected in lowercase without the leading dot.
pub fn is_qualifying_name(file_name: &str, extensions: &[String]) -> bool {
    let lower = file_name.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// Name of the WebP file produced for `file_name`: the last extension is
/// replaced, everything before it is kept byte for byte.
///
/// Leading dots never start an extension, so `.png` and `..png` keep their
/// whole name and become `.png.webp` and `..png.webp`.
pub fn webp_file_name(file_name: &OsStr) -> OsString {
    let has_extension = file_name
        .to_string_lossy()
        .trim_start_matches('.')
        .contains('.');

    let mut webp_name = match Path::new(file_name).file_stem() {
        Some(stem) if has_extension => stem.to_os_string(),
        _ => file_name.to_os_string(),
    };
    webp_name.push(".");
    webp_name.push(WEBP_EXTENSION);
    webp_name
}

/// Print verbose information if verbose mode is enabled
pub fn verbose_println(verbose: bool, message: &str) {
    if verbose {
        println!("{} {}", style("[VERBOSE]").dim(), message);
    }
}

/// Print warning message
pub fn warn_println(message: &str) {
    println!("{} {}", style("[WARNING]").yellow().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_extensions() -> Vec<String> {
        vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()]
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(1)), "1.000s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
    }

    #[test]
    fn test_is_qualifying_name() {
        let exts = default_extensions();

        assert!(is_qualifying_name("a.png", &exts));
        assert!(is_qualifying_name("b.jpg", &exts));
        assert!(is_qualifying_name("photo.jpeg", &exts));
        assert!(is_qualifying_name("X.PNG", &exts));
        assert!(is_qualifying_name("Mixed.JpEg", &exts));

        assert!(!is_qualifying_name("c.txt", &exts));
        assert!(!is_qualifying_name("d", &exts));
        assert!(!is_qualifying_name("already.webp", &exts));
        assert!(!is_qualifying_name("png", &exts));
        assert!(!is_qualifying_name("archive.png.zip", &exts));
    }

    fn webp_name_of(name: &str) -> OsString {
        webp_file_name(OsStr::new(name))
    }

    #[test]
    fn test_webp_file_name() {
        assert_eq!(webp_name_of("a.png"), "a.webp");
        assert_eq!(webp_name_of("X.PNG"), "X.webp");
        assert_eq!(webp_name_of("photo.jpeg"), "photo.webp");
        assert_eq!(webp_name_of("holiday.2024.jpg"), "holiday.2024.webp");
        assert_eq!(webp_name_of("..a.png"), "..a.webp");
    }

    #[test]
    fn test_webp_file_name_leading_dots() {
        assert_eq!(webp_name_of(".png"), ".png.webp");
        assert_eq!(webp_name_of("..png"), "..png.webp");
        assert_eq!(webp_name_of("...jpeg"), "...jpeg.webp");
    }

    #[cfg(unix)]
    #[test]
    fn test_webp_file_name_keeps_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xE9.png");
        assert_eq!(
            webp_file_name(name).as_bytes(),
            b"caf\xE9.webp".as_slice()
        );
    }

    #[test]
    fn test_validate_inputs() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_inputs(dir.path(), &default_extensions()).is_ok());
        assert!(validate_inputs(dir.path(), &[]).is_err());

        let missing = dir.path().join("missing");
        let err = validate_inputs(&missing, &default_extensions()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConvertError>(),
            Some(ConvertError::InvalidInput(_))
        ));
    }
}
