pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Derives the seed for one numbered draw (a trial, an instance) from a base seed.
pub fn derive_seed(base: &[u8; 32], label: &str, index: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(base);
    hasher.update(label.as_bytes());
    hasher.update(&index.to_le_bytes());
    hasher.finalize().into()
}
