use anyhow::{Context, Result};
use clap::Parser;
use method_ranker::archive::{AnalysisReport, analyze_jar_file, top_n};
use method_ranker::cli::{Cli, Commands, OutputFormat};
use method_ranker::decode::{ClassSummary, decode_class};
use std::io::Write;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            jar_path,
            top,
            format,
            output,
            progress,
        } => {
            let report = run_analyze(&jar_path, progress)?;
            let content = render_report(&report, top, format)?;
            write_output(&content, output.as_deref())?;
        }
        Commands::Inspect { class_file, format } => {
            let bytes = std::fs::read(&class_file)
                .with_context(|| format!("failed to read class file: {}", class_file.display()))?;
            let summary = decode_class(&bytes)
                .with_context(|| format!("failed to decode: {}", class_file.display()))?;
            let content = render_summary(&summary, format)?;
            write_output(&content, None)?;
        }
    }

    Ok(())
}

fn run_analyze(jar_path: &Path, progress: bool) -> Result<AnalysisReport> {
    let report = if progress {
        let mut sink = |done: usize, total: usize| {
            eprint!("\r[method-ranker] {done}/{total} entries");
            if done == total {
                eprintln!();
            }
        };
        analyze_jar_file(jar_path, Some(&mut sink))
    } else {
        analyze_jar_file(jar_path, None)
    };
    report.with_context(|| format!("failed to analyze jar: {}", jar_path.display()))
}

fn render_report(report: &AnalysisReport, top: usize, format: OutputFormat) -> Result<String> {
    let ranked = top_n(&report.methods, top);
    match format {
        OutputFormat::Json => {
            let view = serde_json::json!({
                "methods": ranked,
                "stats": report.stats,
                "warnings": report.warnings,
            });
            Ok(serde_json::to_string_pretty(&view)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!(
                "entries_scanned: {}, methods_found: {}, duration_ms: {}\n",
                report.stats.entries_scanned, report.stats.methods_found, report.stats.duration_ms
            ));
            for m in ranked {
                out.push_str(&format!(
                    "{:>8}  {}#{}{}\n",
                    m.bytecode_size, m.class_name, m.method_name, m.descriptor
                ));
            }
            for w in &report.warnings {
                out.push_str(&format!("warning: {w}\n"));
            }
            Ok(out)
        }
    }
}

fn render_summary(summary: &ClassSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => {
            let mut out = format!(
                "{} (version {}.{})\n",
                summary.class_name, summary.major_version, summary.minor_version
            );
            for m in &summary.methods {
                out.push_str(&format!(
                    "{:>8}  {}{}\n",
                    m.bytecode_size, m.name, m.descriptor
                ));
            }
            Ok(out)
        }
    }
}

fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            writeln!(stdout)?;
        }
    }
    Ok(())
}
