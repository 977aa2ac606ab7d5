//! Shared constants for the fingerprint codec.

/// Hex digits per encoded 16-bit slot.
pub const TOKEN_WIDTH: usize = 4;

/// Separator between encoded slots.
pub const TOKEN_DELIMITER: char = '-';

/// Identification slots that must agree before two fingerprints are
/// considered to name the same machine. A policy constant, not derived
/// from the record length.
pub const DEFAULT_MATCH_THRESHOLD: usize = 3;

/// Default obfuscation mask for deployments that do not supply their own.
/// One value per slot of the machine-name layout; the checksum slot is
/// left unkeyed.
pub const DEFAULT_MASK_VALUES: [u16; 6] = [0x6f90, 0x4e25, 0xf4a1, 0x5437, 0xab41, 0x0000];
