//! BitReader: reads a packed bitstream back, most significant bit first.
//!
//! The reader is bounded by a bit limit, so zero padding at the end of the last byte is never
//! returned as data.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.
//!

use log::{debug, trace};

use crate::error::CodecError;
use crate::huffman_coding::huffman::{HuffmanTree, NodeData};

const BUFFER_SIZE: usize = 64 * 1024;
const BIT_MASK: u8 = 0xff;

/// Reads a packed code stream.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    capacity: usize,
    cursor: usize,
    bit_index: usize,
    source: R,
    /// Bits still allowed to be read.
    remaining: u64,
}

impl<R: std::io::Read> BitReader<R> {
    /// Creates a new BitReader that will return at most `bit_limit` bits. The buffer is never
    /// larger than the bytes needed to hold `bit_limit` bits.
    pub fn new(source: R, bit_limit: u64) -> Self {
        let capacity = (bit_limit.saturating_add(7) / 8).clamp(1, BUFFER_SIZE as u64) as usize;
        Self {
            buffer: vec![0; capacity],
            capacity,
            cursor: capacity,
            bit_index: 0,
            source,
            remaining: bit_limit,
        }
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more
    fn have_data(&mut self) -> Result<bool, std::io::Error> {
        // Only try to read more data when the buffer length is equal to the buffer cursor location
        if self.cursor == self.buffer.len() {
            self.buffer.resize(self.capacity, 0);
            let size = self.source.read(&mut self.buffer)?;
            // If nothing came back from our read attempt, then we have no more data.
            if size == 0 {
                self.buffer.clear();
                self.cursor = 0;
                return Ok(false);
            }
            // Adjust the buffer if we read less than the buffer size
            self.buffer.truncate(size);
            // Reset the cursor and bit index
            self.cursor = 0;
            self.bit_index = 0;
        }
        Ok(true)
    }

    /// Return bit as Option<usize> (1 or 0), or None if the bit limit is reached or there is no
    /// more data to read
    pub fn bit(&mut self) -> Result<Option<usize>, std::io::Error> {
        if self.remaining == 0 {
            return Ok(None);
        }
        // If bit_index is == 0, check if we have a byte to read.
        if self.bit_index == 0 && !self.have_data()? {
            return Ok(None);
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        self.remaining -= 1;
        Ok(Some(bit as usize))
    }

    /// Bits left before the limit.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

/// Decode exactly `bit_count` bits of `packed` by walking the Huffman tree. `expected_len` is the
/// number of bytes the frequency table says the stream holds.
pub fn unpack(
    packed: &[u8],
    tree: &HuffmanTree,
    bit_count: u64,
    expected_len: usize,
) -> Result<Vec<u8>, CodecError> {
    let available = packed.len() as u64 * 8;
    if bit_count > available {
        return Err(CodecError::BitCountOverflow {
            bit_count,
            available,
        });
    }
    let root = match tree.root() {
        Some(root) => root,
        None if bit_count == 0 && expected_len == 0 => return Ok(Vec::new()),
        None if bit_count == 0 => {
            return Err(CodecError::LengthMismatch {
                expected: expected_len,
                actual: 0,
            })
        }
        None => return Err(CodecError::EmptyTree(bit_count)),
    };

    // Every symbol costs at least one bit.
    if expected_len as u64 > bit_count {
        return Err(CodecError::LengthMismatch {
            expected: expected_len,
            actual: 0,
        });
    }

    let mut br = BitReader::new(packed, bit_count);
    let mut out = Vec::with_capacity(expected_len);
    let mut node = root;
    let mut mid_code = false;

    while let Some(bit) = br.bit()? {
        let next = match &node.node_data {
            NodeData::Kids(left, right) => {
                if bit == 1 {
                    &**right
                } else {
                    &**left
                }
            }
            NodeData::Leaf(_) => {
                // Only the root can be a leaf here, and build never produces a leaf root.
                return Err(CodecError::IncompleteCode(bit_count - br.remaining()));
            }
        };
        if let NodeData::Leaf(sym) = next.node_data {
            out.push(sym);
            node = root;
            mid_code = false;
        } else {
            node = next;
            mid_code = true;
        }
    }
    trace!("Unpacked to {}", br.loc());

    if mid_code {
        return Err(CodecError::IncompleteCode(bit_count));
    }
    if out.len() != expected_len {
        return Err(CodecError::LengthMismatch {
            expected: expected_len,
            actual: out.len(),
        });
    }
    debug!("Unpacked {} bits into {} bytes", bit_count, out.len());
    Ok(out)
}
