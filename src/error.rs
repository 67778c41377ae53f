use thiserror::Error;

/// Failure while decoding a single class file.
///
/// Every variant is fatal for the buffer it occurred in: a class file is
/// decoded completely or not at all, and a failed decode never affects any
/// other entry of the same archive.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("bad magic: expected 0xCAFEBABE, found {found:#010x}")]
    BadMagic { found: u32 },

    #[error("truncated class file: need {needed} byte(s) at offset {offset}, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("unknown constant pool tag {tag} at index {index}")]
    UnknownConstantTag { tag: u8, index: u16 },

    #[error("constant pool index {index} does not hold a {expected}")]
    InvalidReference { index: u16, expected: &'static str },
}

/// Failure at the archive level, before or outside per-entry decoding.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("not a valid jar/zip container: {0}")]
    InvalidContainer(#[from] zip::result::ZipError),

    #[error("failed to read archive: {0}")]
    Io(#[from] std::io::Error),
}
