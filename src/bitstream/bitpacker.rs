use log::{error, trace};

use crate::error::CodecError;
use crate::huffman_coding::huffman::{Code, CodeTable};

/// Packed code stream. `packed` holds `ceil(bit_count / 8)` bytes; the unused low bits of the last
/// byte are zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedBits {
    pub packed: Vec<u8>,
    pub bit_count: u64,
}

/// Creates a bitstream for output.
pub struct BitPacker {
    output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    bit_count: u64,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call flush() to flush the
    /// bit queue to the buffer before taking the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Internal bitstream write function common to all out functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Writes the low `depth` bits of data (0-32 bits), most significant first.
    pub fn out_bits(&mut self, depth: u8, data: u32) {
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data & (0xffffffff >> (32 - depth))) as u64; //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.bit_count += depth as u64;
        self.write_stream();
    }

    /// Writes a Huffman code. Codes longer than 32 bits go out in two pieces.
    pub fn out_code(&mut self, code: Code) {
        if code.len > 32 {
            let high = code.len - 32;
            self.out_bits(high, (code.bits >> 32) as u32);
            self.out_bits(32, code.bits as u32);
        } else {
            self.out_bits(code.len, code.bits as u32);
        }
    }

    /// Flushes the remaining bits (1-7) from the buffer, padding with 0s in the least
    /// signficant bits
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Number of payload bits written so far, padding excluded.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Flush and hand back the packed stream.
    pub fn finish(mut self) -> EncodedBits {
        self.flush();
        EncodedBits {
            packed: self.output,
            bit_count: self.bit_count,
        }
    }
}

/// Huffman encode `data` with the code table, most significant bit of each code first.
pub fn pack(data: &[u8], table: &CodeTable) -> Result<EncodedBits, CodecError> {
    let mut bp = BitPacker::new(data.len() / 2 + 1);
    for &byte in data {
        let code = table.get(byte);
        if code.len == 0 {
            return Err(CodecError::MissingCode(byte));
        }
        bp.out_code(code);
    }
    trace!("Packed {} bytes into {} bits", data.len(), bp.bit_count());
    Ok(bp.finish())
}
