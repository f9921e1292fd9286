use anyhow::Result;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::borrow::Cow;
use std::path::Path;

use crate::error::ConvertError;

/// Source formats the converter picks up, by file extension
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Decode an image file into a pixel buffer.
///
/// The format is sniffed from the file content; the extension is only used
/// when the content is not recognised. The file handle is closed before this
/// returns, whether decoding succeeded or not.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let decoded = ImageReader::open(path)
        .map_err(image::ImageError::IoError)
        .and_then(|reader| reader.with_guessed_format().map_err(image::ImageError::IoError))
        .and_then(|reader| reader.decode());

    decoded.map_err(|source| {
        anyhow::Error::from(ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Encode an image as WebP and write it to `output_path`, replacing any
/// existing file. Uses the codec's default settings.
pub fn encode_webp(img: &DynamicImage, output_path: &Path) -> Result<()> {
    let encodable = to_encodable(img);

    encodable
        .save_with_format(output_path, ImageFormat::WebP)
        .map_err(|source| {
            anyhow::Error::from(ConvertError::Encode {
                path: output_path.to_path_buf(),
                source,
            })
        })
}

/// The WebP encoder takes 8-bit RGB or RGBA only. Anything else (16-bit PNG,
/// grayscale, float) is widened or narrowed, keeping alpha when present.
fn to_encodable(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => Cow::Borrowed(img),
        other if other.color().has_alpha() => {
            Cow::Owned(DynamicImage::ImageRgba8(other.to_rgba8()))
        }
        other => Cow::Owned(DynamicImage::ImageRgb8(other.to_rgb8())),
    }
}
