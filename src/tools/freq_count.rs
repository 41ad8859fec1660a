use rayon::prelude::*;

/// Byte value -> occurrence count. The counts always sum to the length of the data counted.
pub type FrequencyTable = [u32; 256];

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> FrequencyTable {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || [0_u32; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || [0_u32; 256],
                |mut s, f| {
                    s.iter_mut().zip(f.iter()).for_each(|(a, b)| *a += b);
                    s
                },
            )
    } else {
        let mut freqs = [0_u32; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

/// Total number of bytes described by a frequency table.
pub fn total(freqs: &FrequencyTable) -> usize {
    freqs.iter().map(|&f| f as usize).sum()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_count_test() {
        let f = freqs(b"ABRACADABRA");
        assert_eq!(f[b'A' as usize], 5);
        assert_eq!(f[b'B' as usize], 2);
        assert_eq!(f[b'R' as usize], 2);
        assert_eq!(f[b'C' as usize], 1);
        assert_eq!(f[b'D' as usize], 1);
        assert_eq!(total(&f), 11);
    }

    #[test]
    fn empty_count_test() {
        let f = freqs(&[]);
        assert!(f.iter().all(|&x| x == 0));
        assert_eq!(total(&f), 0);
    }

    #[test]
    fn parallel_matches_sequential_test() {
        let data = (0..200_000_u32)
            .map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8)
            .collect::<Vec<u8>>();
        let par = freqs(&data);
        let mut seq = [0_u32; 256];
        data.iter().for_each(|&b| seq[b as usize] += 1);
        assert_eq!(par, seq);
        assert_eq!(total(&par), data.len());
    }
}
