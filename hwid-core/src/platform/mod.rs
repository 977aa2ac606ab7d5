//! Platform data sources feeding the fingerprint codec.
//!
//! The codec itself never touches the operating system. Raw attribute
//! values arrive through the [`PlatformSource`] trait: the production
//! adapter lives in [`native`], tests and external deployments substitute
//! [`FixedSource`]. Every method is infallible - a source that cannot read
//! real data returns a deterministic fallback (zero or an empty string) so
//! fingerprint generation stays total.

pub mod native;

use serde::{Deserialize, Serialize};

use crate::codec::record::RecordLayout;

/// Supplies the raw machine attributes the fingerprint is derived from.
pub trait PlatformSource {
    /// 16-bit hash of the CPU identification data.
    fn cpu_hash(&self) -> u16;

    /// 16-bit hash of the primary volume serial number.
    fn volume_hash(&self) -> u16;

    /// Hashes of up to two network interface hardware addresses.
    /// Missing adapters are reported as zero; callers must not rely on
    /// the pair's order.
    fn mac_hashes(&self) -> (u16, u16);

    /// Machine (host) name. Empty when unavailable.
    fn machine_name(&self) -> String;
}

// ============================================================================
// Collected Fields
// ============================================================================

/// Raw attribute values collected from a platform source.
///
/// The MAC pair is stored sorted so that adapter enumeration order cannot
/// change the fingerprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFields {
    pub cpu: u16,
    pub volume: u16,
    pub mac1: u16,
    pub mac2: u16,
    pub machine_name: u16,
}

impl RawFields {
    /// Collect every attribute from the source, invoking each method once.
    pub fn collect(source: &dyn PlatformSource) -> Self {
        let (mut mac1, mut mac2) = source.mac_hashes();
        if mac1 > mac2 {
            std::mem::swap(&mut mac1, &mut mac2);
        }
        Self {
            cpu: source.cpu_hash(),
            volume: source.volume_hash(),
            mac1,
            mac2,
            machine_name: hash_name(&source.machine_name()),
        }
    }

    /// Identification fields in canonical slot order for the given layout.
    pub fn ordered(&self, layout: RecordLayout) -> Vec<u16> {
        let mut fields = vec![self.cpu, self.volume, self.mac1, self.mac2];
        if layout.includes_machine_name() {
            fields.push(self.machine_name);
        }
        fields
    }
}

// ============================================================================
// Hash Helpers
// ============================================================================
// Additive 16-bit folds. Coarse by design: collisions across machines are
// expected and absorbed by the match threshold.

/// Fold a hardware (MAC) address into 16 bits: even-indexed bytes land in
/// the low byte, odd-indexed bytes in the high byte.
pub fn hash_mac_bytes(bytes: &[u8]) -> u16 {
    let mut hash = 0u16;
    for (i, b) in bytes.iter().enumerate() {
        hash = hash.wrapping_add(u16::from(*b) << ((i & 1) * 8));
    }
    hash
}

/// Fold an arbitrary text attribute (machine name, CPU identification
/// string) into 16 bits by summing its bytes.
pub fn hash_name(name: &str) -> u16 {
    name.bytes().fold(0u16, |acc, b| acc.wrapping_add(u16::from(b)))
}

/// Fold a wide serial number into 16 bits by summing its 16-bit words.
pub fn fold_serial(serial: u64) -> u16 {
    let mut hash = 0u16;
    let mut rest = serial;
    while rest != 0 {
        hash = hash.wrapping_add(rest as u16);
        rest >>= 16;
    }
    hash
}

// ============================================================================
// Fixed Source
// ============================================================================

/// Deterministic source with caller-chosen attribute values.
///
/// Used by tests, and by deployments that derive the fingerprint from
/// externally supplied data instead of local probing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedSource {
    pub cpu: u16,
    pub volume: u16,
    pub mac1: u16,
    pub mac2: u16,
    pub machine_name: String,
}

impl PlatformSource for FixedSource {
    fn cpu_hash(&self) -> u16 {
        self.cpu
    }

    fn volume_hash(&self) -> u16 {
        self.volume
    }

    fn mac_hashes(&self) -> (u16, u16) {
        (self.mac1, self.mac2)
    }

    fn machine_name(&self) -> String {
        self.machine_name.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_pair_is_order_normalized() {
        let forward = FixedSource {
            mac1: 0xbbbb,
            mac2: 0xaaaa,
            ..Default::default()
        };
        let swapped = FixedSource {
            mac1: 0xaaaa,
            mac2: 0xbbbb,
            ..Default::default()
        };
        assert_eq!(RawFields::collect(&forward), RawFields::collect(&swapped));
        assert_eq!(RawFields::collect(&forward).mac1, 0xaaaa);
    }

    #[test]
    fn test_ordered_follows_layout() {
        let fields = RawFields {
            cpu: 1,
            volume: 2,
            mac1: 3,
            mac2: 4,
            machine_name: 5,
        };
        assert_eq!(
            fields.ordered(RecordLayout::with_machine_name()),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(
            fields.ordered(RecordLayout::without_machine_name()),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_hash_mac_bytes_positional_fold() {
        // Even bytes low, odd bytes high: 0x01 + 0x0200 + 0x03 + 0x0400.
        assert_eq!(hash_mac_bytes(&[0x01, 0x02, 0x03, 0x04]), 0x0604);
        assert_eq!(hash_mac_bytes(&[]), 0);
    }

    #[test]
    fn test_hash_name_sums_bytes() {
        assert_eq!(hash_name(""), 0);
        assert_eq!(hash_name("AB"), 0x41 + 0x42);
    }

    #[test]
    fn test_fold_serial_sums_words() {
        assert_eq!(fold_serial(0), 0);
        assert_eq!(fold_serial(0x0001_0002), 0x0003);
        assert_eq!(fold_serial(0xffff_ffff_ffff_ffff), 0xfffc);
    }
}
