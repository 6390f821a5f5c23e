//! Format-aware cover art handling.
//!
//! Two halves of the cover pipeline live here: extracting the embedded
//! front-cover picture from a WAV/AIFF source (normalized through a
//! decode/re-encode round-trip), and attaching the result to the finished
//! MP3 as a single ID3v2 front-cover frame.

mod error;
mod extractor;

pub use error::CoverError;
pub use extractor::{attach_front_cover, extract_cover, CoverImage};
