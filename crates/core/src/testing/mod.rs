//! Testing utilities and mock implementations for pipeline tests.
//!
//! This module provides a mock transcoder plus byte-level audio fixtures,
//! allowing full batch tests without ffmpeg installed.
//!
//! # Example
//!
//! ```rust,ignore
//! use shellac_core::testing::{fixtures, MockTranscoder};
//!
//! let transcoder = MockTranscoder::new();
//! std::fs::write("in/a.wav", fixtures::wav_with_cover())?;
//!
//! // Use in a BatchRunner...
//! ```

mod mock_transcoder;

pub use mock_transcoder::MockTranscoder;

/// Test fixtures: minimal but well-formed WAV and AIFF files.
pub mod fixtures {
    use id3::frame::{Content, Picture, PictureType};
    use id3::{Frame, TagLike};
    use std::io::Cursor;

    /// A valid 1x1 PNG.
    const PNG_1X1: [u8; 70] = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA, 0x63, 0xFC,
        0xCF, 0xC0, 0x50, 0x0F, 0x00, 0x04, 0x85, 0x01, 0x80, 0x84, 0xA9, 0x8C, 0x21, 0x00, 0x00,
        0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    /// A decodable 1x1 PNG image.
    pub fn png_1x1() -> Vec<u8> {
        PNG_1X1.to_vec()
    }

    /// An ID3v2.4 tag with a title and a front-cover PNG picture.
    fn id3_tag_with_cover() -> Vec<u8> {
        let mut tag = id3::Tag::new();
        tag.set_title("Fixture Song");
        tag.add_frame(Frame::with_content(
            "APIC",
            Content::Picture(Picture {
                mime_type: "image/png".to_string(),
                picture_type: PictureType::CoverFront,
                description: "Cover".to_string(),
                data: png_1x1(),
            }),
        ));
        let mut buf = Cursor::new(Vec::new());
        tag.write_to(&mut buf, id3::Version::Id3v24).unwrap();
        buf.into_inner()
    }

    /// RIFF chunk: little-endian size, padded to an even length.
    fn riff_chunk(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + body.len() + 1);
        out.extend_from_slice(id);
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend_from_slice(body);
        if body.len() % 2 == 1 {
            out.push(0);
        }
        out
    }

    /// IFF chunk: big-endian size, padded to an even length.
    fn iff_chunk(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + body.len() + 1);
        out.extend_from_slice(id);
        out.extend_from_slice(&(body.len() as u32).to_be_bytes());
        out.extend_from_slice(body);
        if body.len() % 2 == 1 {
            out.push(0);
        }
        out
    }

    fn wav_bytes(id3: Option<Vec<u8>>) -> Vec<u8> {
        // 16-byte PCM fmt chunk: mono, 16 bit, 44.1 kHz
        let mut fmt = Vec::new();
        fmt.extend_from_slice(&1u16.to_le_bytes());
        fmt.extend_from_slice(&1u16.to_le_bytes());
        fmt.extend_from_slice(&44_100u32.to_le_bytes());
        fmt.extend_from_slice(&88_200u32.to_le_bytes());
        fmt.extend_from_slice(&2u16.to_le_bytes());
        fmt.extend_from_slice(&16u16.to_le_bytes());

        let mut body = Vec::new();
        body.extend_from_slice(b"WAVE");
        body.extend(riff_chunk(b"fmt ", &fmt));
        body.extend(riff_chunk(b"data", &[0u8; 64]));
        if let Some(tag) = id3 {
            body.extend(riff_chunk(b"ID3 ", &tag));
        }

        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend(body);
        out
    }

    fn aiff_bytes(id3: Option<Vec<u8>>) -> Vec<u8> {
        // 18-byte COMM chunk: mono, 16 bit, 44.1 kHz as an 80-bit extended
        let mut comm = Vec::new();
        comm.extend_from_slice(&1u16.to_be_bytes());
        comm.extend_from_slice(&32u32.to_be_bytes());
        comm.extend_from_slice(&16u16.to_be_bytes());
        comm.extend_from_slice(&[0x40, 0x0E, 0xAC, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

        let mut ssnd = Vec::new();
        ssnd.extend_from_slice(&0u32.to_be_bytes());
        ssnd.extend_from_slice(&0u32.to_be_bytes());
        ssnd.extend_from_slice(&[0u8; 64]);

        let mut body = Vec::new();
        body.extend_from_slice(b"AIFF");
        body.extend(iff_chunk(b"COMM", &comm));
        body.extend(iff_chunk(b"SSND", &ssnd));
        if let Some(tag) = id3 {
            body.extend(iff_chunk(b"ID3 ", &tag));
        }

        let mut out = Vec::new();
        out.extend_from_slice(b"FORM");
        out.extend_from_slice(&(body.len() as u32).to_be_bytes());
        out.extend(body);
        out
    }

    /// A WAV file carrying an ID3 chunk with a front-cover picture.
    pub fn wav_with_cover() -> Vec<u8> {
        wav_bytes(Some(id3_tag_with_cover()))
    }

    /// A WAV file with no tag chunk at all.
    pub fn wav_plain() -> Vec<u8> {
        wav_bytes(None)
    }

    /// An AIFF file carrying an ID3 chunk with a front-cover picture.
    pub fn aiff_with_cover() -> Vec<u8> {
        aiff_bytes(Some(id3_tag_with_cover()))
    }

    /// An AIFF file with no tag chunk at all.
    pub fn aiff_plain() -> Vec<u8> {
        aiff_bytes(None)
    }
}
