const PATTERN: &[u8] = b"ABRACADABRA";

/// Benchmark input: the ABRACADABRA pattern repeated until `size` bytes.
pub fn generate_test_data(size: usize) -> Vec<u8> {
    PATTERN.iter().copied().cycle().take(size).collect()
}
