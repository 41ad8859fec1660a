//! Rank doubling sort of the cyclic rotations of a block.
//!
//! Rotations are never built. We keep an index array of rotation start positions plus a rank
//! array, and each round re-sorts the index array by the pair (rank[i], rank[(i + k) % n]).
//! After the round with window k, equal ranks mean the first 2k bytes of the two rotations match.

use log::trace;

/// Return the start positions of all cyclic rotations of `data`, sorted by rotation content.
/// Identical rotations (periodic data) stay ordered by their start position.
pub fn rotation_order(data: &[u8]) -> Vec<u32> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    // Counting pass. Bucket placement is stable, so equal bytes keep their positional order.
    let mut heads = [0_usize; 256];
    {
        let mut counts = [0_usize; 256];
        data.iter().for_each(|&b| counts[b as usize] += 1);
        let mut sum = 0;
        for (head, count) in heads.iter_mut().zip(counts.iter()) {
            *head = sum;
            sum += count;
        }
    }
    let mut order = vec![0_u32; n];
    for (i, &b) in data.iter().enumerate() {
        order[heads[b as usize]] = i as u32;
        heads[b as usize] += 1;
    }

    // Initial ranks are dense byte ranks along the bucket order.
    let mut rank = vec![0_u32; n];
    let mut top = 0_u32;
    for w in 1..n {
        if data[order[w] as usize] != data[order[w - 1] as usize] {
            top += 1;
        }
        rank[order[w] as usize] = top;
    }

    let mut k = 1;
    let mut new_rank = vec![0_u32; n];
    while k < n && (top as usize) < n - 1 {
        let key = |i: u32| (rank[i as usize], rank[(i as usize + k) % n]);

        // sort_by_key is stable, which keeps ties in position order.
        order.sort_by_key(|&i| key(i));

        top = 0;
        new_rank[order[0] as usize] = 0;
        for w in 1..n {
            if key(order[w]) != key(order[w - 1]) {
                top += 1;
            }
            new_rank[order[w] as usize] = top;
        }
        std::mem::swap(&mut rank, &mut new_rank);
        trace!("window {}: {} distinct ranks", k * 2, top + 1);
        k <<= 1;
    }

    order
}

#[cfg(test)]
mod test {
    use super::rotation_order;

    /// Sort fully materialized rotations, ties by position.
    fn brute_force(data: &[u8]) -> Vec<u32> {
        let n = data.len();
        let mut idx = (0..n as u32).collect::<Vec<u32>>();
        idx.sort_by(|&a, &b| {
            let ra = data[a as usize..].iter().chain(data[..a as usize].iter());
            let rb = data[b as usize..].iter().chain(data[..b as usize].iter());
            ra.cmp(rb).then(a.cmp(&b))
        });
        idx
    }

    #[test]
    fn empty_test() {
        assert!(rotation_order(&[]).is_empty());
    }

    #[test]
    fn single_byte_test() {
        assert_eq!(rotation_order(b"x"), vec![0]);
    }

    #[test]
    fn banana_test() {
        // anaban < ananab < banana < nabana < nanaba
        // rotations: 0 banana, 1 ananab, 2 nanaba, 3 anaban, 4 nabana, 5 abanan
        assert_eq!(rotation_order(b"banana"), vec![5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn periodic_ties_by_position_test() {
        assert_eq!(rotation_order(b"AAAA"), vec![0, 1, 2, 3]);
        assert_eq!(rotation_order(b"abab"), vec![0, 2, 1, 3]);
    }

    #[test]
    fn matches_brute_force_test() {
        let samples: [&[u8]; 6] = [
            b"ABRACADABRAABRACADABRA",
            b"mississippi",
            b"the quick brown fox jumps over the lazy dog",
            b"aaaaabaaaaab",
            &[0, 255, 0, 255, 1, 0],
            b"zyxwvutsrqponmlkjihgfedcba",
        ];
        for s in samples {
            assert_eq!(rotation_order(s), brute_force(s), "input {:?}", s);
        }
    }

    #[test]
    fn order_is_permutation_test() {
        let data = (0..5000_u32)
            .map(|i| (i.wrapping_mul(7919) % 13) as u8)
            .collect::<Vec<u8>>();
        let mut order = rotation_order(&data);
        assert_eq!(order.len(), data.len());
        order.sort_unstable();
        assert!(order.iter().enumerate().all(|(i, &p)| i as u32 == p));
    }
}
