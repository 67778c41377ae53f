//! Class structure navigation between the constant pool and the method table.
//!
//! Nothing in here is kept except cursor position: interfaces and fields are
//! consumed at their declared widths so the method table starts at the right
//! offset.

use crate::cursor::ByteCursor;
use crate::error::DecodeError;

/// Skips a full attribute table: 2-byte count, then per attribute a 2-byte
/// name index and a 4-byte length followed by that many payload bytes. The
/// payload is never interpreted, so any attribute kind passes through,
/// standard or vendor-specific.
pub fn skip_attribute_table(cur: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
    let count = cur.read_u16()?;
    for _ in 0..count {
        cur.skip(2)?;
        let len = cur.read_u32()?;
        cur.skip(len as usize)?;
    }
    Ok(())
}

/// Skips the interface table: 2-byte count, then one 2-byte pool index each.
pub fn skip_interfaces(cur: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
    let count = cur.read_u16()?;
    cur.skip(count as usize * 2)
}

/// Skips the field table: per field a fixed 6-byte header (access flags,
/// name index, descriptor index) and its attribute table.
pub fn skip_fields(cur: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
    let count = cur.read_u16()?;
    for _ in 0..count {
        cur.skip(6)?;
        skip_attribute_table(cur)?;
    }
    Ok(())
}
