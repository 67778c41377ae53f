use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "method-ranker")]
#[command(about = "Rank the methods inside a JAR by bytecode size")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze a jar and print its methods ranked by bytecode size
    Analyze {
        jar_path: PathBuf,

        #[arg(long, value_name = "N", default_value_t = 20)]
        top: usize,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report per-entry progress on stderr
        #[arg(long)]
        progress: bool,
    },
    /// Decode a single .class file and print its method summary
    Inspect {
        class_file: PathBuf,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
