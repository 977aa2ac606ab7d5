//! Reversible keyed bit-mixing over a record's slots.
//!
//! The forward pass XORs each slot with every later slot in strictly
//! ascending index order, then XORs each slot with its mask value. Because
//! later slots are untouched when slot `i` is processed, the mixing pass
//! leaves slot `i` holding the XOR of the original slots `i..n` - a
//! suffix-XOR chain. The inverse exploits that structure directly instead
//! of replaying the nested traversal.
//!
//! This is obfuscation, not cryptography: the transform is a fixed
//! permutation of XORs keyed by the mask.

/// Obfuscate `slots` in place with the given mask.
///
/// `slots` and `mask` must be the same length; the caller validates this
/// at the API boundary.
pub fn smear(slots: &mut [u16], mask: &[u16]) {
    debug_assert_eq!(slots.len(), mask.len());

    // Mixing pass: slot i becomes old[i] ^ old[i+1] ^ .. ^ old[n-1].
    for i in 0..slots.len() {
        for j in (i + 1)..slots.len() {
            slots[i] ^= slots[j];
        }
    }

    for (slot, key) in slots.iter_mut().zip(mask) {
        *slot ^= key;
    }
}

/// Invert [`smear`] in place, restoring the original slot values.
pub fn unsmear(slots: &mut [u16], mask: &[u16]) {
    debug_assert_eq!(slots.len(), mask.len());

    for (slot, key) in slots.iter_mut().zip(mask) {
        *slot ^= key;
    }

    // A smeared slot i holds old[i] ^ smeared[i+1], so XOR-ing with the
    // still-smeared right neighbour restores old[i]. Ascending order keeps
    // each right neighbour untouched until it has been consumed.
    for i in 0..slots.len().saturating_sub(1) {
        slots[i] ^= slots[i + 1];
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn xorshift(state: &mut u32) -> u16 {
        *state ^= *state << 13;
        *state ^= *state >> 17;
        *state ^= *state << 5;
        *state as u16
    }

    #[test]
    fn test_round_trip_identity_random_records() {
        let mut state = 0x1f2e_3d4cu32;
        for len in 1..=8 {
            for _ in 0..200 {
                let original: Vec<u16> = (0..len).map(|_| xorshift(&mut state)).collect();
                let mask: Vec<u16> = (0..len).map(|_| xorshift(&mut state)).collect();

                let mut slots = original.clone();
                smear(&mut slots, &mask);
                unsmear(&mut slots, &mask);
                assert_eq!(slots, original, "length {} round trip", len);
            }
        }
    }

    #[test]
    fn test_round_trip_identity_single_bit_patterns() {
        // Every single-bit record at every slot position, zero mask: the
        // XOR self-inverse property hides many traversal-order bugs, so
        // exercise each bit position independently.
        let len = 6;
        let mask = vec![0u16; len];
        for slot in 0..len {
            for bit in 0..16 {
                let mut original = vec![0u16; len];
                original[slot] = 1 << bit;

                let mut slots = original.clone();
                smear(&mut slots, &mask);
                unsmear(&mut slots, &mask);
                assert_eq!(slots, original, "slot {} bit {}", slot, bit);
            }
        }
    }

    #[test]
    fn test_smear_changes_slots() {
        let original = vec![0x1234u16, 0x5678, 0x0001, 0x0002, 0x68af];
        let mask = vec![0x4e25u16, 0xf4a1, 0x5437, 0xab41, 0x0000];
        let mut slots = original.clone();
        smear(&mut slots, &mask);
        assert_ne!(slots, original, "obfuscation must not be the identity");
    }

    #[test]
    fn test_mixing_is_suffix_xor() {
        let mut slots = vec![0x000fu16, 0x00f0, 0x0f00, 0xf000];
        let mask = vec![0u16; 4];
        smear(&mut slots, &mask);
        assert_eq!(slots, vec![0xffff, 0xfff0, 0xff00, 0xf000]);
    }

    #[test]
    fn test_single_slot_record() {
        let mut slots = vec![0xbeefu16];
        smear(&mut slots, &[0x00ff]);
        assert_eq!(slots, vec![0xbe10]);
        unsmear(&mut slots, &[0x00ff]);
        assert_eq!(slots, vec![0xbeef]);
    }
}
