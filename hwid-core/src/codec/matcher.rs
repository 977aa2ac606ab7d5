//! Slot-wise similarity scoring between two deobfuscated records.
//!
//! Several identification fields are coarse hashes that can drift (adapter
//! swapped, volume reformatted) or collide, so two fingerprints of the
//! same machine are matched field-by-field against a threshold instead of
//! compared for equality.

use crate::codec::record::Record;

/// Count identification slots (checksum excluded) where the two records
/// agree.
pub fn match_score(a: &Record, b: &Record) -> usize {
    a.ident_slots()
        .iter()
        .zip(b.ident_slots())
        .filter(|(x, y)| x == y)
        .count()
}

/// Threshold rule: the records name the same machine iff at least
/// `threshold` identification slots agree.
pub fn is_match(score: usize, threshold: usize) -> bool {
    score >= threshold
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_records_score_all_slots() {
        let record = Record::build(&[1, 2, 3, 4, 5]);
        assert_eq!(match_score(&record, &record), 5);
    }

    #[test]
    fn test_checksum_slot_is_excluded() {
        // Same identification fields, checksum slots forced apart.
        let a = Record::from_slots(vec![1, 2, 3, 4, 0x1111]);
        let b = Record::from_slots(vec![1, 2, 3, 4, 0x2222]);
        assert_eq!(match_score(&a, &b), 4);
    }

    #[test]
    fn test_partial_agreement() {
        let a = Record::build(&[1, 2, 3, 4, 5]);
        let b = Record::build(&[1, 2, 3, 9, 9]);
        assert_eq!(match_score(&a, &b), 3);
        assert!(is_match(3, 3));
        assert!(!is_match(2, 3));
    }
}
