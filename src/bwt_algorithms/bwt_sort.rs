use super::suffix_sort::rotation_order;
use crate::error::CodecError;
use log::debug;

/// Output of the forward transform: the last column of the sorted rotation matrix plus the row
/// holding the original (unrotated) data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BwtResult {
    pub transformed: Vec<u8>,
    pub original_index: u32,
}

/// Burrows-Wheeler-Transform of a block. Each output byte is the byte preceding a rotation start,
/// taken in sorted rotation order.
pub fn bwt_encode(data: &[u8]) -> BwtResult {
    let n = data.len();
    let order = rotation_order(data);

    // Get key and BWT output
    let mut key = 0_u32;
    let mut bwt = Vec::with_capacity(n);
    for (i, &start) in order.iter().enumerate() {
        if start == 0 {
            key = i as u32;
            bwt.push(data[n - 1]);
        } else {
            bwt.push(data[start as usize - 1]);
        }
    }
    debug!("BWT of {} bytes, key is {}", n, key);

    BwtResult {
        transformed: bwt,
        original_index: key,
    }
}

/// Decode a Burrows-Wheeler-Transform using the LF mapping.
pub fn bwt_decode(bwt: &BwtResult) -> Result<Vec<u8>, CodecError> {
    let bwt_in = &bwt.transformed;
    let end = bwt_in.len();
    if end == 0 {
        return Ok(Vec::new());
    }
    if bwt.original_index as usize >= end {
        return Err(CodecError::IndexOutOfRange {
            index: bwt.original_index,
            len: end,
        });
    }

    // Convert frequency count to a cumulative sum of frequencies (first F-column row of each byte)
    let mut freq = [0_u32; 256];
    {
        let mut counts = [0_u32; 256];
        bwt_in.iter().for_each(|&b| counts[b as usize] += 1);
        for i in 0..255 {
            freq[i + 1] = freq[i] + counts[i];
        }
    }

    // Build the transformation vector to find the next character in the original data
    let mut t_vec = vec![0_u32; end];
    for (i, &s) in bwt_in.iter().enumerate() {
        t_vec[freq[s as usize] as usize] = i as u32;
        freq[s as usize] += 1
    }

    // Follow the chain from the key, emitting one byte per step
    let mut out = Vec::with_capacity(end);
    let mut idx = bwt.original_index as usize;
    for _ in 0..end {
        idx = t_vec[idx] as usize;
        out.push(bwt_in[idx]);
    }

    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn abracadabra_encode_test() {
        let r = bwt_encode(b"ABRACADABRAABRACADABRA");
        assert_eq!(r.transformed, b"RRDDAARRCCAAAAAAAABBBB".to_vec());
        assert_eq!(r.original_index, 4);
    }

    #[test]
    fn banana_encode_test() {
        let r = bwt_encode(b"banana");
        assert_eq!(r.transformed, b"nnbaaa".to_vec());
        assert_eq!(r.original_index, 3);
    }

    #[test]
    fn mississippi_round_trip_test() {
        let r = bwt_encode(b"mississippi");
        assert_eq!(r.transformed, b"pssmipissii".to_vec());
        assert_eq!(r.original_index, 4);
        assert_eq!(bwt_decode(&r).unwrap(), b"mississippi".to_vec());
    }

    #[test]
    fn trivial_blocks_test() {
        let r = bwt_encode(&[]);
        assert_eq!(r, BwtResult::default());
        assert!(bwt_decode(&r).unwrap().is_empty());

        let r = bwt_encode(b"q");
        assert_eq!(r.transformed, b"q".to_vec());
        assert_eq!(r.original_index, 0);
        assert_eq!(bwt_decode(&r).unwrap(), b"q".to_vec());
    }

    #[test]
    fn periodic_round_trip_test() {
        let samples: [&[u8]; 3] = [b"AAAA", b"abababab", b"abcabcabcabc"];
        for data in samples {
            let r = bwt_encode(data);
            assert_eq!(bwt_decode(&r).unwrap(), data.to_vec());
        }
    }

    #[test]
    fn permutation_test() {
        let data = b"the rain in spain stays mainly in the plain";
        let r = bwt_encode(data);
        let mut a = data.to_vec();
        let mut b = r.transformed.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn bad_index_test() {
        let r = BwtResult {
            transformed: b"nnbaaa".to_vec(),
            original_index: 6,
        };
        assert!(matches!(
            bwt_decode(&r),
            Err(CodecError::IndexOutOfRange { index: 6, len: 6 })
        ));
    }
}
