//! Cover image extraction and attachment.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use lofty::file::{FileType, TaggedFileExt};
use lofty::picture::{MimeType, PictureType};
use lofty::probe::Probe;
use tracing::debug;

use super::error::CoverError;
use crate::converter::SourceFormat;

/// An extracted, normalized cover image.
#[derive(Debug, Clone)]
pub struct CoverImage {
    /// Encoded image bytes (JPEG or PNG).
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`: `image/jpeg` or `image/png`.
    pub mime_type: String,
}

fn container_type(format: SourceFormat) -> FileType {
    match format {
        SourceFormat::Wav => FileType::Wav,
        SourceFormat::Aiff => FileType::Aiff,
    }
}

/// Extracts the embedded front-cover picture from a WAV or AIFF file.
///
/// The picture frame typed "front cover" is preferred; when a container
/// carries pictures without that designation, the first embedded picture is
/// used instead. The picture is decoded and re-encoded through the image
/// codec, which strips container-specific encoding quirks; JPEG sources
/// stay JPEG, everything else is normalized to PNG.
pub fn extract_cover(path: &Path, format: SourceFormat) -> Result<CoverImage, CoverError> {
    let read_err = |reason: String| CoverError::Read {
        path: path.to_path_buf(),
        reason,
    };

    let tagged_file = Probe::open(path)
        .map_err(|e| read_err(e.to_string()))?
        .guess_file_type()
        .map_err(|e| read_err(e.to_string()))?
        .read()
        .map_err(|e| read_err(e.to_string()))?;

    let expected = container_type(format);
    if tagged_file.file_type() != expected {
        return Err(CoverError::UnsupportedFormat {
            path: path.to_path_buf(),
            expected: format,
            detected: format!("{:?}", tagged_file.file_type()).to_lowercase(),
        });
    }

    let tag = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag())
        .ok_or_else(|| CoverError::MissingCover {
            path: path.to_path_buf(),
        })?;

    let pictures = tag.pictures();
    let picture = pictures
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first())
        .ok_or_else(|| CoverError::MissingCover {
            path: path.to_path_buf(),
        })?;

    let is_jpeg = matches!(picture.mime_type(), Some(MimeType::Jpeg));
    debug!(
        path = %path.display(),
        jpeg = is_jpeg,
        "normalizing embedded cover image"
    );

    let decoded = image::load_from_memory(picture.data()).map_err(|source| CoverError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);
    let image_err = |source: image::ImageError| CoverError::Image {
        path: path.to_path_buf(),
        source,
    };

    let mime_type = if is_jpeg {
        // JPEG has no alpha channel; flatten before re-encoding
        DynamicImage::ImageRgb8(decoded.to_rgb8())
            .write_to(&mut cursor, ImageFormat::Jpeg)
            .map_err(image_err)?;
        "image/jpeg"
    } else {
        decoded
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(image_err)?;
        "image/png"
    };

    Ok(CoverImage {
        bytes,
        mime_type: mime_type.to_string(),
    })
}

/// Attaches a cover image to an MP3 file as its single front-cover frame.
///
/// Reopens the file's ID3 tag (creating one if absent), drops any existing
/// picture frames and writes one APIC front cover, then persists the tag
/// as ID3v2.4.
pub fn attach_front_cover(path: &Path, cover: &CoverImage) -> Result<(), id3::Error> {
    use id3::frame::{Content, Picture, PictureType};
    use id3::{Frame, Tag, TagLike, Version};

    let mut tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(id3::Error {
            kind: id3::ErrorKind::NoTag,
            ..
        }) => Tag::new(),
        Err(e) => return Err(e),
    };

    tag.remove("APIC");
    tag.add_frame(Frame::with_content(
        "APIC",
        Content::Picture(Picture {
            mime_type: cover.mime_type.clone(),
            picture_type: PictureType::CoverFront,
            description: "Cover".to_string(),
            data: cover.bytes.clone(),
        }),
    ));

    tag.write_to_path(path, Version::Id3v24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use id3::TagLike;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_cover_from_wav() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.wav");
        fs::write(&path, fixtures::wav_with_cover()).unwrap();

        let cover = extract_cover(&path, SourceFormat::Wav).unwrap();
        assert_eq!(cover.mime_type, "image/png");
        assert!(!cover.bytes.is_empty());
        // Normalized bytes must themselves be a decodable PNG
        let decoded = image::load_from_memory(&cover.bytes).unwrap();
        assert_eq!(decoded.width(), 1);
        assert_eq!(decoded.height(), 1);
    }

    #[test]
    fn test_extract_cover_from_aiff() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.aiff");
        fs::write(&path, fixtures::aiff_with_cover()).unwrap();

        let cover = extract_cover(&path, SourceFormat::Aiff).unwrap();
        assert_eq!(cover.mime_type, "image/png");
        assert!(!cover.bytes.is_empty());
    }

    #[test]
    fn test_extract_cover_missing_picture() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.wav");
        fs::write(&path, fixtures::wav_plain()).unwrap();

        let result = extract_cover(&path, SourceFormat::Wav);
        assert!(matches!(result, Err(CoverError::MissingCover { .. })));
    }

    #[test]
    fn test_extract_cover_container_mismatch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mislabeled.wav");
        // AIFF bytes behind a .wav extension
        fs::write(&path, fixtures::aiff_plain()).unwrap();

        let result = extract_cover(&path, SourceFormat::Wav);
        assert!(matches!(result, Err(CoverError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_extract_cover_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.wav");
        fs::write(&path, b"not an audio file").unwrap();

        let result = extract_cover(&path, SourceFormat::Wav);
        assert!(result.is_err());
    }

    #[test]
    fn test_attach_front_cover() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.mp3");
        fs::write(&path, b"").unwrap();

        let cover = CoverImage {
            bytes: fixtures::png_1x1().to_vec(),
            mime_type: "image/png".to_string(),
        };
        attach_front_cover(&path, &cover).unwrap();

        let tag = id3::Tag::read_from_path(&path).unwrap();
        let pictures: Vec<_> = tag.pictures().collect();
        assert_eq!(pictures.len(), 1);
        assert_eq!(
            pictures[0].picture_type,
            id3::frame::PictureType::CoverFront
        );
        assert_eq!(pictures[0].mime_type, "image/png");
        assert_eq!(pictures[0].data, fixtures::png_1x1());
    }

    #[test]
    fn test_attach_front_cover_is_single() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.mp3");
        fs::write(&path, b"").unwrap();

        let cover = CoverImage {
            bytes: fixtures::png_1x1().to_vec(),
            mime_type: "image/png".to_string(),
        };
        // Attaching twice must still leave exactly one front cover
        attach_front_cover(&path, &cover).unwrap();
        attach_front_cover(&path, &cover).unwrap();

        let tag = id3::Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.pictures().count(), 1);
    }
}
