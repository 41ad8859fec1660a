//! Single block, in-memory compression using a Burrows-Wheeler Transform followed by static
//! Huffman coding.
//!
//! Basic usage:
//!
//! ```
//! use bwthuff::{compress, decompress};
//!
//! let data = b"ABRACADABRAABRACADABRA";
//! let block = compress(data)?;
//! assert_eq!(decompress(&block)?, data.to_vec());
//! # Ok::<(), bwthuff::CodecError>(())
//! ```
//!
//! The compressed block keeps the BWT key, the frequency table of the transformed bytes and the
//! packed Huffman codes. The Huffman tree itself is never stored; decompression rebuilds it from
//! the frequency table with the same deterministic construction.
//!
//! The `bench` module wraps the codec stages as self-checking benchmarks, driven by the
//! `bwthuff` binary.
//!
pub mod bench;
pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress, CompressedData};
pub use compression::decompress::decompress;
pub use error::CodecError;
