//! Error types for the codec and the benchmark harness.
//!
//! The codec has no transient failure modes. Every `CodecError` means the `CompressedData` handed to
//! `decompress` was corrupted, or the encode and decode paths disagree about the Huffman tree.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("original index {index} is out of range for a block of {len} bytes")]
    IndexOutOfRange { index: u32, len: usize },

    #[error("bit count {bit_count} exceeds the {available} bits available in the packed data")]
    BitCountOverflow { bit_count: u64, available: u64 },

    #[error("{0} encoded bits but the frequency table is empty")]
    EmptyTree(u64),

    #[error("bit stream ended inside a code after {0} bits")]
    IncompleteCode(u64),

    #[error("decoded {actual} bytes, frequency table promises {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("byte {0:#04x} has no code in the code table")]
    MissingCode(u8),

    #[error("bit reader failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no config entry for benchmark {0}")]
    MissingEntry(String),

    #[error("invalid value for {name}.{field}: {value}")]
    InvalidValue {
        name: String,
        field: &'static str,
        value: i64,
    },
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}

impl From<CodecError> for std::io::Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}
