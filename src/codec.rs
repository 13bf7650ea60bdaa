//! Base64 and gzip helpers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::GzDecoder;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to decompress gzip stream: {0}")]
    Gzip(#[source] std::io::Error),
    #[error("decoded data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard-alphabet base64; surrounding whitespace is tolerated.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(text.trim())?)
}

/// Inflate a base64-wrapped gzip payload into text.
pub fn gunzip_base64(text: &str) -> Result<String, CodecError> {
    let compressed = decode_base64(text)?;
    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).map_err(CodecError::Gzip)?;
    Ok(String::from_utf8(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip_base64(text: &str) -> String {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        encode_base64(&encoder.finish().unwrap())
    }

    #[test]
    fn base64_round_trip() {
        let encoded = encode_base64(b"hello world");
        assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
        assert_eq!(decode_base64(&encoded).unwrap(), b"hello world");
    }

    #[test]
    fn decode_tolerates_surrounding_whitespace() {
        assert_eq!(decode_base64("  aGk=\n").unwrap(), b"hi");
    }

    #[test]
    fn invalid_base64_is_reported() {
        let err = decode_base64("not base64!!!").unwrap_err();
        assert!(err.to_string().starts_with("invalid base64"), "{err}");
    }

    #[test]
    fn gunzip_recovers_original_text() {
        let payload = gzip_base64("{\"status\":\"ok\"}");
        assert_eq!(gunzip_base64(&payload).unwrap(), "{\"status\":\"ok\"}");
    }

    #[test]
    fn gunzip_rejects_non_gzip_payloads() {
        let plain = encode_base64(b"just text");
        let err = gunzip_base64(&plain).unwrap_err();
        assert!(err.to_string().contains("gzip"), "{err}");
    }
}
