//! Compression benchmarks: each stage on its own, then the whole pipeline.
//!
//! Encode benchmarks add up output sizes. Decode benchmarks add up decoded lengths and earn a
//! bonus when the last decode reproduced the input exactly.

use super::Benchmark;
use crate::bitstream::bitpacker::{pack, EncodedBits};
use crate::bitstream::bitreader::unpack;
use crate::bwt_algorithms::bwt_sort::{bwt_decode, bwt_encode, BwtResult};
use crate::compression::compress::{compress, CompressedData};
use crate::compression::decompress::decompress;
use crate::error::CodecError;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::freq_count::{freqs, FrequencyTable};
use crate::tools::test_data::generate_test_data;

const STAGE_BONUS: u32 = 100_000;
const PIPELINE_BONUS: u32 = 1_000_000;

fn bonus_if(equal: bool, bonus: u32) -> u32 {
    if equal {
        bonus
    } else {
        0
    }
}

/// Huffman encode raw bytes, returning the frequency table the decoder needs.
fn huffman_encode(data: &[u8]) -> Result<(FrequencyTable, EncodedBits), CodecError> {
    let freqs = freqs(data);
    let table = HuffmanTree::from_freqs(&freqs).code_table();
    Ok((freqs, pack(data, &table)?))
}

pub struct BwtEncode {
    size: usize,
    test_data: Vec<u8>,
    bwt_result: BwtResult,
    result_val: u32,
}

impl BwtEncode {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            test_data: Vec::new(),
            bwt_result: BwtResult::default(),
            result_val: 0,
        }
    }
}

impl Benchmark for BwtEncode {
    fn name(&self) -> &'static str {
        "Compress::BWTEncode"
    }

    fn prepare(&mut self) -> Result<(), CodecError> {
        self.test_data = generate_test_data(self.size);
        Ok(())
    }

    fn run(&mut self, _iteration_id: usize) -> Result<(), CodecError> {
        self.bwt_result = bwt_encode(&self.test_data);
        self.result_val = self
            .result_val
            .wrapping_add(self.bwt_result.transformed.len() as u32);
        Ok(())
    }

    fn checksum(&self) -> u32 {
        self.result_val
    }
}

pub struct BwtDecode {
    size: usize,
    test_data: Vec<u8>,
    bwt_result: BwtResult,
    inverted: Vec<u8>,
    result_val: u32,
}

impl BwtDecode {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            test_data: Vec::new(),
            bwt_result: BwtResult::default(),
            inverted: Vec::new(),
            result_val: 0,
        }
    }
}

impl Benchmark for BwtDecode {
    fn name(&self) -> &'static str {
        "Compress::BWTDecode"
    }

    fn prepare(&mut self) -> Result<(), CodecError> {
        self.test_data = generate_test_data(self.size);
        self.bwt_result = bwt_encode(&self.test_data);
        Ok(())
    }

    fn run(&mut self, _iteration_id: usize) -> Result<(), CodecError> {
        self.inverted = bwt_decode(&self.bwt_result)?;
        self.result_val = self.result_val.wrapping_add(self.inverted.len() as u32);
        Ok(())
    }

    fn checksum(&self) -> u32 {
        self.result_val
            .wrapping_add(bonus_if(self.inverted == self.test_data, STAGE_BONUS))
    }
}

pub struct HuffEncode {
    size: usize,
    test_data: Vec<u8>,
    encoded: EncodedBits,
    result_val: u32,
}

impl HuffEncode {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            test_data: Vec::new(),
            encoded: EncodedBits::default(),
            result_val: 0,
        }
    }
}

impl Benchmark for HuffEncode {
    fn name(&self) -> &'static str {
        "Compress::HuffEncode"
    }

    fn prepare(&mut self) -> Result<(), CodecError> {
        self.test_data = generate_test_data(self.size);
        Ok(())
    }

    fn run(&mut self, _iteration_id: usize) -> Result<(), CodecError> {
        let (_, encoded) = huffman_encode(&self.test_data)?;
        self.encoded = encoded;
        self.result_val = self
            .result_val
            .wrapping_add(self.encoded.packed.len() as u32);
        Ok(())
    }

    fn checksum(&self) -> u32 {
        self.result_val
    }
}

pub struct HuffDecode {
    size: usize,
    test_data: Vec<u8>,
    freqs: FrequencyTable,
    encoded: EncodedBits,
    decoded: Vec<u8>,
    result_val: u32,
}

impl HuffDecode {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            test_data: Vec::new(),
            freqs: [0; 256],
            encoded: EncodedBits::default(),
            decoded: Vec::new(),
            result_val: 0,
        }
    }
}

impl Benchmark for HuffDecode {
    fn name(&self) -> &'static str {
        "Compress::HuffDecode"
    }

    fn prepare(&mut self) -> Result<(), CodecError> {
        self.test_data = generate_test_data(self.size);
        (self.freqs, self.encoded) = huffman_encode(&self.test_data)?;
        Ok(())
    }

    fn run(&mut self, _iteration_id: usize) -> Result<(), CodecError> {
        // The tree is rebuilt every time, exactly as a real decoder would have to.
        let tree = HuffmanTree::from_freqs(&self.freqs);
        self.decoded = unpack(
            &self.encoded.packed,
            &tree,
            self.encoded.bit_count,
            self.test_data.len(),
        )?;
        self.result_val = self.result_val.wrapping_add(self.decoded.len() as u32);
        Ok(())
    }

    fn checksum(&self) -> u32 {
        self.result_val
            .wrapping_add(bonus_if(self.decoded == self.test_data, STAGE_BONUS))
    }
}

pub struct BwtHuffEncode {
    size: usize,
    test_data: Vec<u8>,
    result_val: u32,
}

impl BwtHuffEncode {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            test_data: Vec::new(),
            result_val: 0,
        }
    }
}

impl Benchmark for BwtHuffEncode {
    fn name(&self) -> &'static str {
        "Compress::BWTHuffEncode"
    }

    fn prepare(&mut self) -> Result<(), CodecError> {
        self.test_data = generate_test_data(self.size);
        Ok(())
    }

    fn run(&mut self, _iteration_id: usize) -> Result<(), CodecError> {
        let compressed = compress(&self.test_data)?;
        self.result_val = self
            .result_val
            .wrapping_add(compressed.packed_len() as u32);
        Ok(())
    }

    fn checksum(&self) -> u32 {
        self.result_val
    }
}

pub struct BwtHuffDecode {
    size: usize,
    test_data: Vec<u8>,
    compressed_data: Option<CompressedData>,
    decompressed: Vec<u8>,
    result_val: u32,
}

impl BwtHuffDecode {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            test_data: Vec::new(),
            compressed_data: None,
            decompressed: Vec::new(),
            result_val: 0,
        }
    }
}

impl Benchmark for BwtHuffDecode {
    fn name(&self) -> &'static str {
        "Compress::BWTHuffDecode"
    }

    fn prepare(&mut self) -> Result<(), CodecError> {
        self.test_data = generate_test_data(self.size);
        self.compressed_data = Some(compress(&self.test_data)?);
        Ok(())
    }

    fn run(&mut self, _iteration_id: usize) -> Result<(), CodecError> {
        if let Some(compressed) = &self.compressed_data {
            self.decompressed = decompress(compressed)?;
            self.result_val = self
                .result_val
                .wrapping_add(self.decompressed.len() as u32);
        }
        Ok(())
    }

    fn checksum(&self) -> u32 {
        let round_trip = self.compressed_data.is_some() && self.decompressed == self.test_data;
        self.result_val
            .wrapping_add(bonus_if(round_trip, PIPELINE_BONUS))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// prepare, one warmup run, three timed runs
    fn drive(bench: &mut dyn Benchmark) -> u32 {
        bench.prepare().unwrap();
        bench.warmup(1).unwrap();
        bench.run_all(3).unwrap();
        bench.checksum()
    }

    #[test]
    fn bwt_checksums_test() {
        assert_eq!(drive(&mut BwtEncode::new(50)), 200);
        assert_eq!(drive(&mut BwtDecode::new(51)), 100_204);
    }

    #[test]
    fn huffman_checksums_test() {
        assert_eq!(drive(&mut HuffEncode::new(52)), 56);
        assert_eq!(drive(&mut HuffDecode::new(53)), 100_212);
    }

    #[test]
    fn pipeline_checksums_test() {
        assert_eq!(drive(&mut BwtHuffEncode::new(1000)), 1048);
        assert_eq!(drive(&mut BwtHuffDecode::new(1000)), 1_004_000);
    }

    #[test]
    fn decode_without_prepare_has_no_bonus_test() {
        let mut bench = BwtHuffDecode::new(10);
        bench.run(0).unwrap();
        assert_eq!(bench.checksum(), 0);
    }

    #[test]
    fn empty_input_test() {
        assert_eq!(drive(&mut BwtHuffEncode::new(0)), 0);
        assert_eq!(drive(&mut BwtHuffDecode::new(0)), PIPELINE_BONUS);
        assert_eq!(drive(&mut HuffDecode::new(0)), STAGE_BONUS);
    }
}
