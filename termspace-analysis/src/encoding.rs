//! Text decoding for corpus documents and resource files.
//!
//! Corpora were historically stored as UTF-16 with a byte order mark, so
//! decoding is done here on raw bytes instead of relying on
//! `fs::read_to_string`.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AnalysisError;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("utf-16 payload has odd length {0}")]
    OddLength(usize),

    #[error("unpaired utf-16 surrogate {0:#06x}")]
    UnpairedSurrogate(u16),
}

/// How raw bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextEncoding {
    /// Sniff a byte order mark; without one, expect UTF-8.
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "utf-8")]
    Utf8,
    /// Sniff a byte order mark; without one, expect little-endian UTF-16.
    #[serde(rename = "utf-16")]
    Utf16,
    #[serde(rename = "utf-16le")]
    Utf16Le,
    #[serde(rename = "utf-16be")]
    Utf16Be,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Auto => "auto",
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16 => "utf-16",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
        }
    }

    /// Decode a complete byte buffer. Any malformed sequence fails the whole buffer.
    pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeError> {
        match self {
            TextEncoding::Auto => match bytes {
                [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
                [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
                _ => decode_utf8(bytes),
            },
            TextEncoding::Utf8 => decode_utf8(bytes),
            TextEncoding::Utf16 => match bytes {
                [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
                _ => decode_utf16(
                    bytes.strip_prefix(&UTF16_LE_BOM[..]).unwrap_or(bytes),
                    u16::from_le_bytes,
                ),
            },
            TextEncoding::Utf16Le => decode_utf16(
                bytes.strip_prefix(&UTF16_LE_BOM[..]).unwrap_or(bytes),
                u16::from_le_bytes,
            ),
            TextEncoding::Utf16Be => decode_utf16(
                bytes.strip_prefix(&UTF16_BE_BOM[..]).unwrap_or(bytes),
                u16::from_be_bytes,
            ),
        }
    }

    /// Read and decode a file, attaching the path to any failure.
    pub fn read_to_string(self, path: impl AsRef<Path>) -> Result<String, AnalysisError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.decode(&bytes).map_err(|source| AnalysisError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(TextEncoding::Auto),
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-16" | "utf16" => Ok(TextEncoding::Utf16),
            "utf-16le" | "utf16le" => Ok(TextEncoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(TextEncoding::Utf16Be),
            _ => Err(AnalysisError::UnknownEncoding(s.to_string())),
        }
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, DecodeError> {
    let bytes = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);
    Ok(std::str::from_utf8(bytes)?.to_owned())
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, DecodeError> {
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddLength(bytes.len()));
    }
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|decoded| decoded.map_err(|err| DecodeError::UnpairedSurrogate(err.unpaired_surrogate())))
        .collect()
}
