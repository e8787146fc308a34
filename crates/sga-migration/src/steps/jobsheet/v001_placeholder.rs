//! v001 placeholder migration.
//!
//! Job sheets had no shape change at version 1. The no-op keeps version
//! numbering contiguous with the job and report chains.

use crate::coerce::CoercionLog;
use crate::Record;

pub fn migrate(_record: &mut Record, _log: &mut CoercionLog) {
    // No-op: job sheets were unchanged between v0 and v1.
}
