//! Local machine identity.
//!
//! One-time collection of this machine's raw fields plus the two public
//! entry points, `generate_id` and `compare_ids`. The collected fields are
//! memoized for the process lifetime: a documented caching optimization,
//! not a correctness requirement.

use parking_lot::RwLock;
use tracing::debug;

use hwid_error::Result;

use crate::codec::pipeline::FingerprintCodec;
use crate::codec::record::Mask;
use crate::platform::native::NativeSource;
use crate::platform::{PlatformSource, RawFields};

// ============================================================================
// Field Cache
// ============================================================================

/// Compute-once cache for a machine's raw fields.
///
/// The first caller collects from the platform source under the write
/// lock; later callers, concurrent or not, observe the completed value and
/// never a partial one. [`FieldCache::reset`] forces recollection and
/// exists for tests.
#[derive(Debug, Default)]
pub struct FieldCache {
    fields: RwLock<Option<RawFields>>,
}

impl FieldCache {
    pub const fn new() -> Self {
        Self {
            fields: RwLock::new(None),
        }
    }

    /// Return the cached fields, collecting them on first use.
    pub fn get_or_collect(&self, source: &dyn PlatformSource) -> RawFields {
        if let Some(fields) = *self.fields.read() {
            return fields;
        }

        let mut guard = self.fields.write();
        // Another caller may have collected while we waited for the lock.
        if let Some(fields) = *guard {
            return fields;
        }
        let fields = RawFields::collect(source);
        debug!(?fields, "collected local machine fields");
        *guard = Some(fields);
        fields
    }

    /// Drop the memoized fields so the next call recollects them.
    pub fn reset(&self) {
        *self.fields.write() = None;
    }
}

/// Process-wide cache of this machine's fields, backing [`generate_id`].
static LOCAL_FIELDS: FieldCache = FieldCache::new();

// ============================================================================
// Public Operations
// ============================================================================

/// Generate this machine's fingerprint string.
///
/// Uses the default codec (machine-name layout, threshold 3) and the
/// native platform source; raw fields are collected at most once per
/// process. The only possible error is a mask of the wrong length.
pub fn generate_id(mask: &Mask) -> Result<String> {
    let codec = FingerprintCodec::default();
    let fields = LOCAL_FIELDS.get_or_collect(&NativeSource::new());
    codec.generate(&fields, mask)
}

/// Decide whether two fingerprint strings identify the same machine.
///
/// Malformed or checksum-invalid inputs yield `Ok(false)`; only a mask of
/// the wrong length is surfaced as an error.
pub fn compare_ids(id_a: &str, id_b: &str, mask: &Mask) -> Result<bool> {
    FingerprintCodec::default().compare(id_a, id_b, mask)
}

/// Drop the process-wide memoized fields. Intended for tests.
pub fn reset_local_fields() {
    LOCAL_FIELDS.reset();
}

// ============================================================================
// Tests
// ============================================================================
