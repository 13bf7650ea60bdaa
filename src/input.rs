//! Input loading and JSON deserialization with path-aware diagnostics.

use serde::de::DeserializeOwned;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// Parse failure annotated with the JSON path where it occurred.
    #[error("invalid JSON at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Deserialize with JSON-path context in error messages.
pub fn json_from_str<T: DeserializeOwned>(src: &str) -> Result<T, InputError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
        let path = err.path().to_string();
        InputError::Json {
            path,
            source: err.into_inner(),
        }
    })
}

/// Read a source argument: a literal file path, or `-` for stdin.
pub fn read_source(arg: &str) -> Result<String, InputError> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| InputError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok(buf)
    } else {
        std::fs::read_to_string(arg).map_err(|source| InputError::Io {
            path: arg.to_string(),
            source,
        })
    }
}
