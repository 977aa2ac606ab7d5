//! The fingerprint codec.
//!
//! Four layered algorithms over a fixed-order array of 16-bit slots:
//!
//! - `record` - record layout, checksum building and validation
//! - `smear` - reversible keyed bit-mixing (obfuscation) and its inverse
//! - `wire` - dash-delimited fixed-width hex encoding and parsing
//! - `matcher` - slot-wise similarity scoring between two records
//! - `pipeline` - [`FingerprintCodec`], the end-to-end encode/decode path

pub mod matcher;
pub mod pipeline;
pub mod record;
pub mod smear;
pub mod wire;

pub use matcher::{is_match, match_score};
pub use pipeline::FingerprintCodec;
pub use record::{checksum_of, Mask, Record, RecordLayout};
