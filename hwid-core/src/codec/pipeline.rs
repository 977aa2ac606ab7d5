//! End-to-end fingerprint pipeline.
//!
//! [`FingerprintCodec`] ties the layers together: fields -> record ->
//! smear -> wire string on the generate path, and wire string -> unsmear
//! -> checksum validation -> similarity score on the compare path.

use tracing::{debug, trace};

use hwid_error::{HwidError, Result};

use crate::codec::matcher::{is_match, match_score};
use crate::codec::record::{checksum_of, Mask, Record, RecordLayout};
use crate::codec::{smear, wire};
use crate::constants::DEFAULT_MATCH_THRESHOLD;
use crate::platform::RawFields;

/// Fingerprint codec configured with a record layout and match threshold.
///
/// The default codec uses the machine-name layout (six slots) and requires
/// three agreeing identification slots for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerprintCodec {
    layout: RecordLayout,
    match_threshold: usize,
}

impl FingerprintCodec {
    pub fn new(layout: RecordLayout, match_threshold: usize) -> Self {
        Self {
            layout,
            match_threshold,
        }
    }

    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    pub fn match_threshold(&self) -> usize {
        self.match_threshold
    }

    /// Obfuscate a record with the mask and render it as a fingerprint
    /// string.
    pub fn encode(&self, record: &Record, mask: &Mask) -> Result<String> {
        mask.check_len(self.layout.record_slots())?;
        if record.len() != self.layout.record_slots() {
            return Err(HwidError::malformed(format!(
                "record has {} slots, layout expects {}",
                record.len(),
                self.layout.record_slots()
            )));
        }

        let mut slots = record.slots().to_vec();
        smear::smear(&mut slots, mask.values());
        Ok(wire::encode_slots(&slots))
    }

    /// Parse, deobfuscate and checksum-validate a fingerprint string.
    pub fn decode(&self, input: &str, mask: &Mask) -> Result<Record> {
        mask.check_len(self.layout.record_slots())?;

        let mut slots = wire::decode_slots(input, self.layout.record_slots())?;
        smear::unsmear(&mut slots, mask.values());

        let record = Record::from_slots(slots);
        if !record.checksum_valid() {
            let expected = checksum_of(record.ident_slots());
            let found = record.checksum_slot();
            debug!(expected, found, "fingerprint checksum mismatch");
            return Err(HwidError::ChecksumMismatch { expected, found });
        }
        Ok(record)
    }

    /// Build a record from collected fields, obfuscate and encode it.
    pub fn generate(&self, fields: &RawFields, mask: &Mask) -> Result<String> {
        let record = Record::build(&fields.ordered(self.layout));
        self.encode(&record, mask)
    }

    /// Decode two fingerprint strings and decide whether they identify the
    /// same machine.
    ///
    /// Any parse or checksum failure on either input degrades to
    /// `Ok(false)`; only a key length mismatch is surfaced as an error.
    pub fn compare(&self, id_a: &str, id_b: &str, mask: &Mask) -> Result<bool> {
        mask.check_len(self.layout.record_slots())?;

        let a = match self.decode(id_a, mask) {
            Ok(record) => record,
            Err(e) => {
                trace!(error = %e, "first fingerprint rejected");
                return Ok(false);
            }
        };
        let b = match self.decode(id_b, mask) {
            Ok(record) => record,
            Err(e) => {
                trace!(error = %e, "second fingerprint rejected");
                return Ok(false);
            }
        };

        let score = match_score(&a, &b);
        debug!(
            score,
            threshold = self.match_threshold,
            "fingerprint comparison"
        );
        Ok(is_match(score, self.match_threshold))
    }
}

impl Default for FingerprintCodec {
    fn default() -> Self {
        Self::new(RecordLayout::default(), DEFAULT_MATCH_THRESHOLD)
    }
}

// ============================================================================
// Tests
// ============================================================================
