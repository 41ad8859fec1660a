use log::{info, trace};

use crate::bitstream::bitreader::unpack;
use crate::bwt_algorithms::bwt_sort::{bwt_decode, BwtResult};
use crate::compression::compress::CompressedData;
use crate::error::CodecError;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::freq_count::total;

/// Decompress one block. Follows the inverse of the compression process.
/// - Rebuild the Huffman tree from the frequency table.
/// - Huffman decode the packed bits back to the BWT bytes.
/// - BWT reversal restores the original data.
pub fn decompress(block: &CompressedData) -> Result<Vec<u8>, CodecError> {
    let tree = HuffmanTree::from_freqs(block.freqs());
    let expected = total(block.freqs());
    trace!(
        "Decoding {} bits, expecting {} bytes",
        block.bit_count(),
        expected
    );

    let encoded = block.encoded();
    let transformed = unpack(&encoded.packed, &tree, encoded.bit_count, expected)?;

    let data = bwt_decode(&BwtResult {
        transformed,
        original_index: block.original_index(),
    })?;
    info!("Decompressed {} bytes.", data.len());
    Ok(data)
}
