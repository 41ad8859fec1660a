//! The bitstream module forms the bit level I/O subsystem of the codec.
//!
//! BitPacker turns a sequence of Huffman codes into a dense byte vector, most significant bit
//! first, and counts the payload bits so the zero padding of the final byte can be ignored.
//!
//! BitReader reads the bits back under that same bit limit, and unpack() walks the Huffman tree
//! with them to recover the coded bytes.
//!
pub mod bitpacker;
pub mod bitreader;
