//! Jar scanning, aggregation and ranking.
//!
//! One corrupt class never aborts a run: each entry that fails to decode
//! becomes a warning and the rest of the archive is still ranked. Only a
//! container that cannot be opened as a zip at all fails the whole run.

use memmap2::Mmap;
use serde::Serialize;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use std::time::Instant;
use zip::ZipArchive;

use crate::decode::decode_class;
use crate::error::ArchiveError;

const CLASS_SUFFIX: &str = ".class";

/// One method of one class, ready for ranking.
#[derive(Debug, Clone, Serialize)]
pub struct MethodEntry {
    /// Display form, `.`-separated.
    pub class_name: String,
    pub method_name: String,
    pub descriptor: String,
    pub bytecode_size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub entries_scanned: usize,
    pub methods_found: usize,
    pub duration_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Sorted by `bytecode_size` descending; ties keep archive order.
    pub methods: Vec<MethodEntry>,
    pub stats: RunStats,
    pub warnings: Vec<String>,
}

/// Called after each processed entry with `(processed, total)`.
pub type ProgressSink<'a> = &'a mut dyn FnMut(usize, usize);

/// Decodes every `.class` entry of an in-memory jar and ranks all methods by
/// bytecode size.
pub fn analyze_archive(
    archive_bytes: &[u8],
    mut progress: Option<ProgressSink<'_>>,
) -> Result<AnalysisReport, ArchiveError> {
    let start = Instant::now();
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;

    let mut class_entries: Vec<(usize, String)> = Vec::new();
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if entry.is_dir() || !entry.name().ends_with(CLASS_SUFFIX) {
            continue;
        }
        class_entries.push((i, entry.name().to_string()));
    }

    let mut methods: Vec<MethodEntry> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if class_entries.is_empty() {
        warnings.push("archive contains no .class entries".to_string());
        return Ok(AnalysisReport {
            methods,
            stats: RunStats {
                entries_scanned: 0,
                methods_found: 0,
                duration_ms: start.elapsed().as_millis() as u64,
            },
            warnings,
        });
    }

    let total = class_entries.len();
    for (done, (index, name)) in class_entries.iter().enumerate() {
        match read_entry(&mut archive, *index) {
            Ok(bytes) => match decode_class(&bytes) {
                Ok(summary) => {
                    let class_name = summary.class_name.replace('/', ".");
                    for m in summary.methods {
                        methods.push(MethodEntry {
                            class_name: class_name.clone(),
                            method_name: m.name,
                            descriptor: m.descriptor,
                            bytecode_size: m.bytecode_size,
                        });
                    }
                }
                Err(e) => warnings.push(format!("{name}: {e}")),
            },
            Err(e) => warnings.push(format!("{name}: {e}")),
        }
        if let Some(sink) = progress.as_deref_mut() {
            sink(done + 1, total);
        }
    }

    // Stable sort: methods of equal size stay in archive encounter order.
    methods.sort_by(|a, b| b.bytecode_size.cmp(&a.bytecode_size));

    Ok(AnalysisReport {
        stats: RunStats {
            entries_scanned: total,
            methods_found: methods.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        methods,
        warnings,
    })
}

/// Maps the jar read-only and analyzes it in place.
pub fn analyze_jar_file(
    jar_path: &Path,
    progress: Option<ProgressSink<'_>>,
) -> Result<AnalysisReport, ArchiveError> {
    let file = File::open(jar_path)?;
    // SAFETY: The file is opened read-only and remains valid for the lifetime
    // of the mmap. The mmap is dropped before the file, ensuring memory safety.
    let mmap = unsafe { Mmap::map(&file)? };
    analyze_archive(&mmap[..], progress)
}

/// First `n` entries of an already ranked list. No recomputation.
pub fn top_n(methods: &[MethodEntry], n: usize) -> &[MethodEntry] {
    &methods[..n.min(methods.len())]
}

fn read_entry(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    index: usize,
) -> Result<Vec<u8>, ArchiveError> {
    let mut entry = archive.by_index(index)?;
    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut bytes)?;
    Ok(bytes)
}
