//! The huffman module builds the static prefix code used for the entropy stage of the codec.
//!
//! One Huffman table is used per block. Only the frequency table is kept in the compressed data;
//! the decoder rebuilds the tree from it. Both sides therefore run the same construction, with an
//! explicit creation-order key to break ties between equal weights.
//!
//! Packing the codes into bytes happens in the bitstream module.
//!

pub mod huffman;
