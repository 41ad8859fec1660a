use log::{debug, info};

use crate::bitstream::bitpacker::{pack, EncodedBits};
use crate::bwt_algorithms::bwt_sort::bwt_encode;
use crate::error::CodecError;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::freq_count::{freqs, FrequencyTable};

/*
    A compressed block is everything decompress needs and nothing more: the BWT key, the
    frequency table of the transformed bytes (the Huffman tree is rebuilt from it) and the packed
    code stream. The transformed bytes themselves are not kept.
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedData {
    original_index: u32,
    freqs: FrequencyTable,
    encoded: EncodedBits,
}

impl CompressedData {
    /// Reassemble a compressed block from its parts.
    pub fn from_parts(original_index: u32, freqs: FrequencyTable, encoded: EncodedBits) -> Self {
        Self {
            original_index,
            freqs,
            encoded,
        }
    }

    pub fn original_index(&self) -> u32 {
        self.original_index
    }

    pub fn freqs(&self) -> &FrequencyTable {
        &self.freqs
    }

    pub fn encoded(&self) -> &EncodedBits {
        &self.encoded
    }

    pub fn bit_count(&self) -> u64 {
        self.encoded.bit_count
    }

    /// Size of the packed code stream in bytes.
    pub fn packed_len(&self) -> usize {
        self.encoded.packed.len()
    }
}

/// Compress one block: BWT, frequency count, Huffman tree, then bit packing.
pub fn compress(data: &[u8]) -> Result<CompressedData, CodecError> {
    let bwt = bwt_encode(data);

    let freqs = freqs(&bwt.transformed);
    let tree = HuffmanTree::from_freqs(&freqs);
    let table = tree.code_table();
    debug!("{} symbols in use", table.iter().count());

    let encoded = pack(&bwt.transformed, &table)?;

    info!(
        "Compressed {} bytes to {} bits ({} bytes). Key is {}.",
        data.len(),
        encoded.bit_count,
        encoded.packed.len(),
        bwt.original_index
    );

    Ok(CompressedData {
        original_index: bwt.original_index,
        freqs,
        encoded,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::total;

    #[test]
    fn abracadabra_test() {
        let data = b"ABRACADABRAABRACADABRA";
        let c = compress(data).unwrap();
        assert!(c.original_index() < data.len() as u32);
        assert_eq!(c.original_index(), 4);
        assert_eq!(c.bit_count(), 46);
        assert_eq!(c.encoded().packed, vec![0xfe, 0xd3, 0xf9, 0x00, 0x36, 0xd8]);
    }

    #[test]
    fn single_symbol_test() {
        let c = compress(b"AAAA").unwrap();
        assert_eq!(c.bit_count(), 4);
        assert_eq!(c.encoded().packed, vec![0x00]);
        assert_eq!(c.freqs()[b'A' as usize], 4);
    }

    #[test]
    fn empty_test() {
        let c = compress(&[]).unwrap();
        assert_eq!(c.bit_count(), 0);
        assert_eq!(c.packed_len(), 0);
        assert_eq!(c.original_index(), 0);
        assert!(c.freqs().iter().all(|&f| f == 0));
    }

    #[test]
    fn deterministic_test() {
        let data = b"It was the best of times, it was the worst of times";
        assert_eq!(compress(data).unwrap(), compress(data).unwrap());
    }

    #[test]
    fn conservation_and_accounting_test() {
        let data = b"Peter Piper picked a peck of pickled peppers";
        let c = compress(data).unwrap();
        assert_eq!(total(c.freqs()), data.len());
        // A Huffman code's cost is sum(weight * code length).
        let table = HuffmanTree::from_freqs(c.freqs()).code_table();
        let cost: u64 = table
            .iter()
            .map(|(b, code)| c.freqs()[b as usize] as u64 * code.len as u64)
            .sum();
        assert_eq!(c.bit_count(), cost);
        assert_eq!(c.packed_len() as u64, (c.bit_count() + 7) / 8);
    }
}
