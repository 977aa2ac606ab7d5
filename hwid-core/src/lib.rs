//! hwid Core Library
//!
//! Machine fingerprint codec: computes a pseudo-unique identifier for the
//! local machine by hashing low-entropy hardware/OS attributes (CPU
//! identity, primary-volume serial, up to two network hardware addresses,
//! machine name) into a fixed-order record of 16-bit slots with a trailing
//! checksum, obfuscating the record with a caller-supplied mask and
//! encoding it as a dash-delimited uppercase hex string. A companion
//! operation decodes two such strings and scores how many underlying
//! fields agree.
//!
//! The obfuscation is a reversible XOR mixing transform, not a security
//! mechanism, and several fields are coarse hashes that can collide -
//! comparison is threshold-based, not exact.
//!
//! # Module Structure
//!
//! - `codec/` - record layout, smear transform, wire format, scoring
//! - `platform/` - injectable data sources for raw machine attributes
//! - `identity` - one-time local field collection and the public API
//!
//! # Example
//!
//! ```
//! use hwid_core::constants::DEFAULT_MASK_VALUES;
//! use hwid_core::{compare_ids, generate_id, Mask};
//!
//! let mask = Mask::from(DEFAULT_MASK_VALUES);
//! let id = generate_id(&mask).unwrap();
//! assert!(compare_ids(&id, &id, &mask).unwrap());
//! ```

// Grouped modules
pub mod codec;
pub mod platform;

// Standalone modules
pub mod constants;
pub mod identity;

// Re-export primary types from codec/
pub use codec::pipeline::FingerprintCodec;
pub use codec::record::{checksum_of, Mask, Record, RecordLayout};
pub use codec::smear::{smear, unsmear};
pub use codec::wire::{decode_slots, encode_slots};
pub use codec::matcher::{is_match, match_score};

// Re-export error types
pub use hwid_error::{HwidError, Result};

// Re-export the public operations and the memo object
pub use identity::{compare_ids, generate_id, reset_local_fields, FieldCache};

// Re-export platform sources
pub use platform::{
    fold_serial, hash_mac_bytes, hash_name, native::NativeSource, FixedSource, PlatformSource,
    RawFields,
};
