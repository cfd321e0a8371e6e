//! Stable seed derivation from an input name.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// The generator every curve is sampled from.
pub type CurveRng = ChaCha8Rng;

/// FNV-1a over the UTF-8 bytes of `name`.
pub fn fnv1a_64(name: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in name.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Reduce the name hash into `[0, modulus)`. A zero modulus keeps the full hash.
pub fn derive_seed(name: &str, modulus: u64) -> u64 {
    let hash = fnv1a_64(name);
    if modulus == 0 {
        hash
    } else {
        hash % modulus
    }
}

/// Build the generator for `name`. Identical names always yield identical streams.
pub fn seeded_rng(name: &str, modulus: u64) -> CurveRng {
    let seed = derive_seed(name, modulus);
    tracing::debug!(name, seed, "derived curve seed");
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_fnv1a_empty_is_offset_basis() {
        assert_eq!(fnv1a_64(""), FNV_OFFSET_BASIS);
    }

    #[test]
    fn test_fnv1a_known_vectors() {
        assert_eq!(fnv1a_64("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a_64("foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn test_seed_reduced_by_modulus() {
        let modulus = 1u64 << 32;
        for name in ["Alice", "Bob", "", "Zoë"] {
            assert!(derive_seed(name, modulus) < modulus);
        }
        assert_eq!(derive_seed("Alice", 1u64 << 32), 2_669_007_207);
    }

    #[test]
    fn test_zero_modulus_keeps_hash() {
        assert_eq!(derive_seed("Alice", 0), fnv1a_64("Alice"));
    }

    #[test]
    fn test_same_name_same_stream() {
        let mut a = seeded_rng("Alice", 1 << 32);
        let mut b = seeded_rng("Alice", 1 << 32);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_trailing_characters_change_seed() {
        assert_ne!(derive_seed("Alice", 1 << 32), derive_seed("Alicf", 1 << 32));
        assert_ne!(derive_seed("Alice", 1 << 32), derive_seed("Alice ", 1 << 32));
    }
}
