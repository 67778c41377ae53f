//! Constant pool parsing and string resolution.
//!
//! The pool is 1-indexed and index 0 is never valid. Long and Double
//! constants occupy two consecutive slots; the second slot exists only to
//! keep later indices aligned and must never be resolved. Only the entry
//! kinds that later resolution needs keep their payload — everything else is
//! consumed at its declared width and kept as an opaque tag.

use crate::cursor::ByteCursor;
use crate::error::DecodeError;

const TAG_UTF8: u8 = 1;
const TAG_INTEGER: u8 = 3;
const TAG_FLOAT: u8 = 4;
const TAG_LONG: u8 = 5;
const TAG_DOUBLE: u8 = 6;
const TAG_CLASS: u8 = 7;
const TAG_STRING: u8 = 8;
const TAG_FIELDREF: u8 = 9;
const TAG_METHODREF: u8 = 10;
const TAG_INTERFACE_METHODREF: u8 = 11;
const TAG_NAME_AND_TYPE: u8 = 12;
const TAG_METHOD_HANDLE: u8 = 15;
const TAG_METHOD_TYPE: u8 = 16;
const TAG_DYNAMIC: u8 = 17;
const TAG_INVOKE_DYNAMIC: u8 = 18;
const TAG_MODULE: u8 = 19;
const TAG_PACKAGE: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    Utf8(String),
    Class {
        name_index: u16,
    },
    NameAndType {
        name_index: u16,
        descriptor_index: u16,
    },
    /// Structurally skipped, never dereferenced.
    Opaque {
        tag: u8,
    },
    /// The reserved slot after a Long or Double entry.
    WidePlaceholder,
}

#[derive(Debug)]
pub struct ConstantPool {
    /// Slot 0 is a placeholder so entries can be addressed by their 1-based
    /// pool index directly.
    entries: Vec<Constant>,
}

impl ConstantPool {
    /// Parses the pool from a cursor positioned at the 16-bit entry count,
    /// leaving the cursor just past the last pool entry.
    pub fn parse(cur: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let count = cur.read_u16()?;
        let mut entries = vec![Constant::WidePlaceholder; count as usize];

        let mut index: u16 = 1;
        while index < count {
            let tag = cur.read_u8()?;
            let mut slots = 1;
            let entry = match tag {
                TAG_UTF8 => {
                    let len = cur.read_u16()? as usize;
                    let bytes = cur.read_bytes(len)?;
                    // Real-world method and class names are ASCII; modified
                    // UTF-8 oddities degrade to replacement characters
                    // instead of failing the whole decode.
                    Constant::Utf8(String::from_utf8_lossy(bytes).into_owned())
                }
                TAG_CLASS => Constant::Class {
                    name_index: cur.read_u16()?,
                },
                TAG_NAME_AND_TYPE => Constant::NameAndType {
                    name_index: cur.read_u16()?,
                    descriptor_index: cur.read_u16()?,
                },
                TAG_INTEGER | TAG_FLOAT => {
                    cur.skip(4)?;
                    Constant::Opaque { tag }
                }
                TAG_LONG | TAG_DOUBLE => {
                    cur.skip(8)?;
                    slots = 2;
                    Constant::Opaque { tag }
                }
                TAG_STRING | TAG_METHOD_TYPE | TAG_MODULE | TAG_PACKAGE => {
                    cur.skip(2)?;
                    Constant::Opaque { tag }
                }
                TAG_METHOD_HANDLE => {
                    cur.skip(3)?;
                    Constant::Opaque { tag }
                }
                TAG_FIELDREF | TAG_METHODREF | TAG_INTERFACE_METHODREF | TAG_DYNAMIC
                | TAG_INVOKE_DYNAMIC => {
                    cur.skip(4)?;
                    Constant::Opaque { tag }
                }
                // An unknown tag has an unknowable payload width; guessing
                // would desynchronize every later offset.
                _ => return Err(DecodeError::UnknownConstantTag { tag, index }),
            };
            entries[index as usize] = entry;
            index += slots;
        }

        Ok(Self { entries })
    }

    fn get(&self, index: u16, expected: &'static str) -> Result<&Constant, DecodeError> {
        if index == 0 || (index as usize) >= self.entries.len() {
            return Err(DecodeError::InvalidReference { index, expected });
        }
        Ok(&self.entries[index as usize])
    }

    /// Resolves a Utf8 slot or fails with InvalidReference.
    pub fn utf8(&self, index: u16) -> Result<&str, DecodeError> {
        match self.get(index, "Utf8 constant")? {
            Constant::Utf8(s) => Ok(s),
            _ => Err(DecodeError::InvalidReference {
                index,
                expected: "Utf8 constant",
            }),
        }
    }

    /// Resolves a Class slot down to its Utf8 name.
    pub fn class_name(&self, index: u16) -> Result<&str, DecodeError> {
        match self.get(index, "Class constant")? {
            Constant::Class { name_index } => self.utf8(*name_index),
            _ => Err(DecodeError::InvalidReference {
                index,
                expected: "Class constant",
            }),
        }
    }
}
