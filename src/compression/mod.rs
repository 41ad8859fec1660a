//! The compression module ties the stages together for a single in-memory block.
//!
//! Compression happens in the following steps:
//! - Burrow Wheeler Transform: Sort the rotations of the block so that equal bytes cluster.
//! - Frequency count of the transformed bytes.
//! - Huffman coding: Build a static prefix code from those counts.
//! - Bit packing: Write each transformed byte's code, most significant bit first.
//!
//! Decompression follows the inverse of the compression process. The Huffman tree is rebuilt from
//! the stored frequency table, which must yield exactly the tree the compressor used.
//!

pub mod compress;
pub mod decompress;
