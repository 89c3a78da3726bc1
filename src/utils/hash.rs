// Mon Oct 12 2026 - Alex

/// Short digests used to build stable synthetic identifiers
pub struct HashComputer;

impl HashComputer {
    /// Compute FNV-1a hash (32-bit)
    pub fn fnv1a_32(data: &[u8]) -> u32 {
        const FNV_PRIME: u32 = 0x01000193;
        const FNV_OFFSET: u32 = 0x811c9dc5;

        let mut hash = FNV_OFFSET;
        for byte in data {
            hash ^= *byte as u32;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }

    /// Eight lowercase hex digits of the FNV-1a digest of `text`.
    pub fn digest8(text: &str) -> String {
        format!("{:08x}", Self::fnv1a_32(text.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_32() {
        assert_eq!(HashComputer::fnv1a_32(b""), 0x811c9dc5);
        assert_eq!(HashComputer::fnv1a_32(b"a"), 0xe40c292c);
        assert_eq!(HashComputer::fnv1a_32(b"foobar"), 0xbf9cf968);
    }

    #[test]
    fn test_digest8() {
        let d = HashComputer::digest8("foobar");
        assert_eq!(d, "bf9cf968");
        assert_eq!(HashComputer::digest8(""), "811c9dc5");
    }
}
