//! Best-effort text decoding of upload bytes.

use encoding_rs::{Encoding, UTF_8};
use serde::Serialize;

/// Encoding label used when the caller does not supply one.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// How an upload was decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decoding {
    /// Name of the encoding actually used.
    pub encoding: &'static str,
    /// False when the requested label was unknown and UTF-8 was used.
    pub label_recognized: bool,
    /// True when a byte-order mark overrode the requested encoding.
    pub bom_override: bool,
    /// True when undecodable sequences were replaced with U+FFFD.
    pub had_replacements: bool,
}

impl Default for Decoding {
    /// Clean UTF-8 decoding.
    fn default() -> Self {
        Self {
            encoding: UTF_8.name(),
            label_recognized: true,
            bom_override: false,
            had_replacements: false,
        }
    }
}

/// Decoded text plus how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub decoding: Decoding,
}

/// Decodes `bytes` using the encoding named by `label`.
///
/// A byte-order mark overrides the label. Unknown labels fall back to UTF-8
/// and malformed sequences become U+FFFD instead of failing the upload; both
/// are reported in [`Decoding`].
pub fn decode_bytes(bytes: &[u8], label: &str) -> DecodedText {
    let known = Encoding::for_label(label.trim().as_bytes());
    let requested = known.unwrap_or(UTF_8);

    let (text, actual, had_errors) = requested.decode(bytes);
    DecodedText {
        text: text.into_owned(),
        decoding: Decoding {
            encoding: actual.name(),
            label_recognized: known.is_some(),
            bom_override: actual != requested,
            had_replacements: had_errors,
        },
    }
}
