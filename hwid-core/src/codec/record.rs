//! Record and mask types.
//!
//! A record is a fixed-order sequence of 16-bit identification fields with
//! a trailing checksum slot. The mask is the caller-owned obfuscation key,
//! one value per record slot.

use hwid_error::{HwidError, Result};
use serde::{Deserialize, Serialize};

/// Sum of the given slots modulo 2^16.
pub fn checksum_of(fields: &[u16]) -> u16 {
    fields.iter().fold(0u16, |acc, v| acc.wrapping_add(*v))
}

// ============================================================================
// Record Layout
// ============================================================================

/// Which identification fields a record carries, and therefore how many
/// slots it has.
///
/// Historically the fingerprint existed in two variants, with and without
/// a machine-name slot. Both share one code path; the layout only decides
/// the slot count. Canonical slot order is CPU hash, volume-serial hash,
/// MAC-hash-1, MAC-hash-2, optional machine-name hash, checksum (last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLayout {
    include_machine_name: bool,
}

impl RecordLayout {
    /// Five identification slots plus checksum (the original deployment).
    pub const fn with_machine_name() -> Self {
        Self {
            include_machine_name: true,
        }
    }

    /// Four identification slots plus checksum.
    pub const fn without_machine_name() -> Self {
        Self {
            include_machine_name: false,
        }
    }

    pub const fn includes_machine_name(self) -> bool {
        self.include_machine_name
    }

    /// Number of identification slots (checksum slot excluded).
    pub const fn ident_slots(self) -> usize {
        if self.include_machine_name {
            5
        } else {
            4
        }
    }

    /// Total slots, including the trailing checksum slot.
    pub const fn record_slots(self) -> usize {
        self.ident_slots() + 1
    }
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self::with_machine_name()
    }
}

// ============================================================================
// Record
// ============================================================================

/// Fixed-order sequence of 16-bit fingerprint fields plus a trailing
/// checksum slot.
///
/// A record is created fresh for each generate or decode call and has no
/// lifecycle beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    slots: Vec<u16>,
}

impl Record {
    /// Build a record from identification fields, appending the checksum.
    pub fn build(fields: &[u16]) -> Self {
        let mut slots = Vec::with_capacity(fields.len() + 1);
        slots.extend_from_slice(fields);
        slots.push(checksum_of(fields));
        Self { slots }
    }

    /// Wrap already-complete slots (identification fields plus checksum).
    /// Used on the decode path before checksum validation.
    pub fn from_slots(slots: Vec<u16>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[u16] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Identification slots, excluding the trailing checksum slot.
    pub fn ident_slots(&self) -> &[u16] {
        self.slots.split_last().map(|(_, rest)| rest).unwrap_or(&[])
    }

    /// Value of the trailing checksum slot.
    pub fn checksum_slot(&self) -> u16 {
        self.slots.last().copied().unwrap_or(0)
    }

    /// Recompute the checksum over the identification slots and compare it
    /// against the stored checksum slot.
    pub fn checksum_valid(&self) -> bool {
        match self.slots.split_last() {
            Some((checksum, fields)) => checksum_of(fields) == *checksum,
            None => false,
        }
    }
}

// ============================================================================
// Mask
// ============================================================================

/// Caller-supplied obfuscation key: one 16-bit value per record slot.
///
/// The mask is never persisted by the codec; it only keys the smear
/// transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mask {
    values: Vec<u16>,
}

impl Mask {
    pub fn new(values: Vec<u16>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[u16] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reject masks whose length does not match the record layout.
    pub(crate) fn check_len(&self, expected: usize) -> Result<()> {
        if self.values.len() != expected {
            return Err(HwidError::KeyLengthMismatch {
                expected,
                found: self.values.len(),
            });
        }
        Ok(())
    }
}

impl<const N: usize> From<[u16; N]> for Mask {
    fn from(values: [u16; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<&[u16]> for Mask {
    fn from(values: &[u16]) -> Self {
        Self::new(values.to_vec())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_wraps_modulo_2_16() {
        assert_eq!(checksum_of(&[0xffff, 0x0002]), 0x0001);
        assert_eq!(
            checksum_of(&[0x1234, 0x5678, 0x0001, 0x0002]),
            0x68af,
            "reference scenario checksum"
        );
    }

    #[test]
    fn test_build_appends_valid_checksum() {
        let record = Record::build(&[0x1234, 0x5678, 0x0001, 0x0002]);
        assert_eq!(record.len(), 5);
        assert_eq!(record.checksum_slot(), 0x68af);
        assert!(record.checksum_valid());
    }

    #[test]
    fn test_mutated_slot_fails_checksum() {
        let record = Record::build(&[0x1234, 0x5678, 0x0001, 0x0002]);
        for i in 0..record.len() - 1 {
            let mut slots = record.slots().to_vec();
            slots[i] ^= 0x0100;
            assert!(
                !Record::from_slots(slots).checksum_valid(),
                "mutation of slot {} must invalidate the checksum",
                i
            );
        }
    }

    #[test]
    fn test_empty_record_is_invalid() {
        assert!(!Record::from_slots(Vec::new()).checksum_valid());
        assert!(Record::from_slots(Vec::new()).ident_slots().is_empty());
    }

    #[test]
    fn test_layout_slot_counts() {
        assert_eq!(RecordLayout::with_machine_name().ident_slots(), 5);
        assert_eq!(RecordLayout::with_machine_name().record_slots(), 6);
        assert_eq!(RecordLayout::without_machine_name().ident_slots(), 4);
        assert_eq!(RecordLayout::without_machine_name().record_slots(), 5);
        assert!(RecordLayout::default().includes_machine_name());
    }

    #[test]
    fn test_mask_length_check() {
        let mask = Mask::from([0x4e25, 0xf4a1, 0x5437, 0xab41, 0x0000]);
        assert!(mask.check_len(5).is_ok());
        assert_eq!(
            mask.check_len(6),
            Err(hwid_error::HwidError::KeyLengthMismatch {
                expected: 6,
                found: 5
            })
        );
    }
}
