//! JSON pretty-printing and minification.

use crate::input::{self, InputError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonFmtError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to serialize JSON: {0}")]
    Write(#[from] serde_json::Error),
}

/// Indentation unit shared by the JSON and XML formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Two,
    Four,
    Tab,
}

impl Indent {
    pub(crate) fn as_bytes(self) -> &'static [u8] {
        match self {
            Indent::Two => b"  ",
            Indent::Four => b"    ",
            Indent::Tab => b"\t",
        }
    }

    /// (fill character, repeat count) for writers that indent per level.
    pub(crate) fn fill(self) -> (u8, usize) {
        match self {
            Indent::Two => (b' ', 2),
            Indent::Four => (b' ', 4),
            Indent::Tab => (b'\t', 1),
        }
    }
}

/// Re-serialize with the requested indentation. Key order is preserved.
pub fn beautify(src: &str, indent: Indent) -> Result<String, JsonFmtError> {
    let value: serde_json::Value = input::json_from_str(src)?;
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Strip all insignificant whitespace.
pub fn minify(src: &str) -> Result<String, JsonFmtError> {
    let value: serde_json::Value = input::json_from_str(src)?;
    Ok(serde_json::to_string(&value)?)
}
