//! # method-ranker
//!
//! Rank the methods inside a JAR by bytecode size, straight from the class
//! files — no decompilation, no JVM.
//!
//! ## Architecture
//!
//! - **cursor**: Bounds-checked big-endian reader over a class file buffer
//! - **pool**: Constant pool parsing and string resolution
//! - **walker**: Structural navigation past interfaces, fields and attributes
//! - **method**: Per-method name/descriptor and Code length extraction
//! - **decode**: Single class file decode entry point
//! - **archive**: Jar scanning, aggregation and ranking
//! - **error**: Decode and archive error types
//! - **cli**: Command line interface

pub mod archive;
pub mod cli;
pub mod cursor;
pub mod decode;
pub mod error;
pub mod method;
pub mod pool;
pub mod walker;

pub use archive::{AnalysisReport, MethodEntry, RunStats, analyze_archive, analyze_jar_file, top_n};
pub use decode::{ClassSummary, decode_class};
pub use error::{ArchiveError, DecodeError};
