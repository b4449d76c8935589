//! Source encoding conversion
//!
//! Text may arrive as raw bytes in any supported encoding. Everything is
//! decoded strictly to UTF-8 before segmentation so that equivalent text
//! yields identical grapheme sequences regardless of where it came from.

use crate::error::{MetricsError, Result};
use encoding_rs::{DecoderResult, Encoding};
use std::borrow::Cow;

/// Declared encoding of a byte input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Ascii,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    /// Any WHATWG-registered legacy encoding (Shift_JIS, EUC-KR, windows-1252, ...)
    Legacy(&'static Encoding),
}

impl SourceEncoding {
    /// Resolve an encoding label such as `"utf-16le"` or `"shift_jis"`.
    ///
    /// UTF-32 labels are handled here since the WHATWG registry omits them.
    pub fn for_label(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "ascii" | "us-ascii" => return Ok(Self::Ascii),
            "utf-32le" | "utf32le" | "utf-32" => return Ok(Self::Utf32Le),
            "utf-32be" | "utf32be" => return Ok(Self::Utf32Be),
            _ => {}
        }

        match Encoding::for_label(normalized.as_bytes()) {
            Some(enc) if enc == encoding_rs::UTF_8 => Ok(Self::Utf8),
            Some(enc) if enc == encoding_rs::UTF_16LE => Ok(Self::Utf16Le),
            Some(enc) if enc == encoding_rs::UTF_16BE => Ok(Self::Utf16Be),
            Some(enc) => Ok(Self::Legacy(enc)),
            None => Err(MetricsError::UnknownEncoding(label.to_string())),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascii => "US-ASCII",
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf32Le => "UTF-32LE",
            Self::Utf32Be => "UTF-32BE",
            Self::Legacy(enc) => enc.name(),
        }
    }
}

/// Decode `bytes` from the declared encoding.
///
/// Malformed input is an error, never replaced with U+FFFD. UTF-8 and ASCII
/// input borrows.
///
/// # Example
///
/// ```rust
/// use strmetrics::algorithms::encoding::{decode_text, SourceEncoding};
///
/// let utf16: Vec<u8> = "né".encode_utf16().flat_map(u16::to_le_bytes).collect();
/// assert_eq!(decode_text(&utf16, SourceEncoding::Utf16Le).unwrap(), "né");
/// ```
pub fn decode_text(bytes: &[u8], encoding: SourceEncoding) -> Result<Cow<'_, str>> {
    let malformed = |position: usize| MetricsError::Decode {
        encoding: encoding.name(),
        position,
    };

    match encoding {
        SourceEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
            Some(pos) => Err(malformed(pos)),
            None => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| malformed(e.valid_up_to())),
        },
        SourceEncoding::Utf8 => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|e| malformed(e.valid_up_to())),
        SourceEncoding::Utf16Le | SourceEncoding::Utf16Be => {
            if bytes.len() % 2 != 0 {
                return Err(malformed(bytes.len() - 1));
            }
            let big_endian = encoding == SourceEncoding::Utf16Be;
            let units = bytes.chunks_exact(2).map(|pair| {
                let pair = [pair[0], pair[1]];
                if big_endian {
                    u16::from_be_bytes(pair)
                } else {
                    u16::from_le_bytes(pair)
                }
            });

            let mut out = String::with_capacity(bytes.len() / 2);
            let mut offset = 0usize;
            for decoded in char::decode_utf16(units) {
                let ch = decoded.map_err(|_| malformed(offset))?;
                offset += ch.len_utf16() * 2;
                out.push(ch);
            }
            Ok(Cow::Owned(out))
        }
        SourceEncoding::Utf32Le | SourceEncoding::Utf32Be => {
            if bytes.len() % 4 != 0 {
                return Err(malformed(bytes.len() - bytes.len() % 4));
            }
            let big_endian = encoding == SourceEncoding::Utf32Be;
            bytes
                .chunks_exact(4)
                .enumerate()
                .map(|(i, quad)| {
                    let quad = [quad[0], quad[1], quad[2], quad[3]];
                    let scalar = if big_endian {
                        u32::from_be_bytes(quad)
                    } else {
                        u32::from_le_bytes(quad)
                    };
                    char::from_u32(scalar).ok_or_else(|| malformed(i * 4))
                })
                .collect::<Result<String>>()
                .map(Cow::Owned)
        }
        SourceEncoding::Legacy(enc) => decode_legacy(bytes, enc).map(Cow::Owned).map_err(malformed),
    }
}

/// Strict legacy decode; on failure returns the byte offset of the first
/// malformed sequence.
fn decode_legacy(bytes: &[u8], encoding: &'static Encoding) -> std::result::Result<String, usize> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len());
    let mut out = String::with_capacity(capacity);
    let mut consumed = 0usize;

    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[consumed..], &mut out, true);
        consumed += read;
        match result {
            DecoderResult::InputEmpty => return Ok(out),
            DecoderResult::OutputFull => {
                let more = decoder
                    .max_utf8_buffer_length_without_replacement(bytes.len() - consumed)
                    .unwrap_or(0);
                out.reserve(more.max(16));
            }
            DecoderResult::Malformed(bad, after) => {
                return Err(consumed.saturating_sub(usize::from(bad) + usize::from(after)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(s: &str) -> Vec<u8> {
        s.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    fn utf32be(s: &str) -> Vec<u8> {
        s.chars().flat_map(|c| (c as u32).to_be_bytes()).collect()
    }

    #[test]
    fn test_utf8_borrows() {
        let decoded = decode_text("münchen".as_bytes(), SourceEncoding::Utf8).unwrap();
        assert!(matches!(decoded, Cow::Borrowed("münchen")));
    }

    #[test]
    fn test_utf16_and_utf32() {
        let text = "অআইঈউ y\u{306} 日本語";
        assert_eq!(
            decode_text(&utf16le(text), SourceEncoding::Utf16Le).unwrap(),
            text
        );
        assert_eq!(
            decode_text(&utf32be(text), SourceEncoding::Utf32Be).unwrap(),
            text
        );
    }

    #[test]
    fn test_legacy_encoding() {
        let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode("日本語");
        let enc = SourceEncoding::for_label("shift_jis").unwrap();
        assert_eq!(decode_text(&bytes, enc).unwrap(), "日本語");
    }

    #[test]
    fn test_legacy_malformed_position() {
        let enc = SourceEncoding::for_label("shift_jis").unwrap();
        // 0xFF is neither a single-byte character nor a lead byte
        assert_eq!(
            decode_text(&[b'a', b'b', 0xff, b'c'], enc),
            Err(MetricsError::Decode {
                encoding: "Shift_JIS",
                position: 2
            })
        );

        let (mut bytes, _, _) = encoding_rs::SHIFT_JIS.encode("日本");
        bytes.to_mut().push(0xff);
        assert_eq!(
            decode_text(&bytes, enc),
            Err(MetricsError::Decode {
                encoding: "Shift_JIS",
                position: 4
            })
        );
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(
            decode_text(&[b'a', 0xff], SourceEncoding::Ascii),
            Err(MetricsError::Decode {
                encoding: "US-ASCII",
                position: 1
            })
        );
        // Lone high surrogate
        assert!(decode_text(&[0x00, 0xd8], SourceEncoding::Utf16Le).is_err());
        // Odd byte count
        assert!(decode_text(&[0x61], SourceEncoding::Utf16Be).is_err());
        // Beyond U+10FFFF
        assert!(decode_text(&[0x00, 0x11, 0x00, 0x00], SourceEncoding::Utf32Be).is_err());
    }

    #[test]
    fn test_for_label() {
        assert_eq!(SourceEncoding::for_label("UTF-8").unwrap(), SourceEncoding::Utf8);
        assert_eq!(
            SourceEncoding::for_label("utf-16be").unwrap(),
            SourceEncoding::Utf16Be
        );
        assert_eq!(
            SourceEncoding::for_label("utf-32le").unwrap(),
            SourceEncoding::Utf32Le
        );
        assert!(matches!(
            SourceEncoding::for_label("euc-kr"),
            Ok(SourceEncoding::Legacy(_))
        ));
        assert!(SourceEncoding::for_label("klingon").is_err());
    }
}
