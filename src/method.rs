//! Per-method name/descriptor resolution and Code length extraction.

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::pool::ConstantPool;

const CODE_ATTRIBUTE: &str = "Code";

#[derive(Debug, Clone, Serialize)]
pub struct MethodRecord {
    pub name: String,
    pub descriptor: String,
    /// Declared length of the method's bytecode stream. Exactly 0 for
    /// methods without a Code attribute (abstract, native).
    pub bytecode_size: u32,
}

/// Reads the full method table from a cursor positioned at its 16-bit count.
pub fn read_methods(
    cur: &mut ByteCursor<'_>,
    pool: &ConstantPool,
) -> Result<Vec<MethodRecord>, DecodeError> {
    let count = cur.read_u16()?;
    let mut methods = Vec::with_capacity(count as usize);
    for _ in 0..count {
        methods.push(read_method(cur, pool)?);
    }
    Ok(methods)
}

fn read_method(cur: &mut ByteCursor<'_>, pool: &ConstantPool) -> Result<MethodRecord, DecodeError> {
    cur.skip(2)?; // access_flags
    let name = pool.utf8(cur.read_u16()?)?.to_string();
    let descriptor = pool.utf8(cur.read_u16()?)?.to_string();

    let mut bytecode_size = 0u32;
    let attr_count = cur.read_u16()?;
    for _ in 0..attr_count {
        let name_index = cur.read_u16()?;
        let len = cur.read_u32()?;
        let body_start = cur.position();

        if pool.utf8(name_index)? == CODE_ATTRIBUTE {
            cur.skip(4)?; // max_stack, max_locals
            bytecode_size = cur.read_u32()?;
        }

        // The declared length always applies from the attribute body start,
        // whether or not anything inside the attribute was read.
        cur.rewind_to(body_start);
        cur.skip(len as usize)?;
    }

    Ok(MethodRecord {
        name,
        descriptor,
        bytecode_size,
    })
}
