//! Single class file decode entry point.
//!
//! The decode is a straight line through the class file layout: magic,
//! version, constant pool, header, interfaces, fields, methods. Any failure
//! along the way abandons the buffer; there is no partial result.

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::method::{MethodRecord, read_methods};
use crate::pool::ConstantPool;
use crate::walker::{skip_fields, skip_interfaces};

pub const CLASS_MAGIC: u32 = 0xCAFE_BABE;

#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    /// Internal form, `/`-separated.
    pub class_name: String,
    pub minor_version: u16,
    pub major_version: u16,
    pub methods: Vec<MethodRecord>,
}

pub fn decode_class(bytes: &[u8]) -> Result<ClassSummary, DecodeError> {
    let mut cur = ByteCursor::new(bytes);

    let magic = cur.read_u32()?;
    if magic != CLASS_MAGIC {
        return Err(DecodeError::BadMagic { found: magic });
    }
    let minor_version = cur.read_u16()?;
    let major_version = cur.read_u16()?;

    let pool = ConstantPool::parse(&mut cur)?;

    cur.skip(2)?; // access_flags
    let this_class = cur.read_u16()?;
    let class_name = pool.class_name(this_class)?.to_string();
    cur.skip(2)?; // super_class

    skip_interfaces(&mut cur)?;
    skip_fields(&mut cur)?;
    let methods = read_methods(&mut cur, &pool)?;

    Ok(ClassSummary {
        class_name,
        minor_version,
        major_version,
        methods,
    })
}
