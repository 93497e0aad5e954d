use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use inistore::{LineEnding, ParseOptions, StoreOptions, UnrecognizedLines, WriteOptions};

/// Read and edit flat `[section]` / `key=value` INI files.
#[derive(Debug, Parser)]
#[command(name = "inistore", version, about)]
pub struct Args {
    /// Fail on lines that are neither a section header nor a key=value entry.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Line ending used when writing files.
    #[arg(
        long,
        global = true,
        value_enum,
        env = "INISTORE_LINE_ENDING",
        default_value_t = LineEndingArg::Native
    )]
    pub line_ending: LineEndingArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the value of a key.
    Get {
        file: PathBuf,
        section: String,
        key: String,
    },
    /// Change the value of an existing key.
    Set {
        file: PathBuf,
        section: String,
        key: String,
        value: String,
    },
    /// Print the parsed file in normalized form.
    Dump {
        file: PathBuf,
        /// Only print this section.
        #[arg(long)]
        section: Option<String>,
    },
    /// List section names, one per line.
    Sections { file: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineEndingArg {
    Native,
    Lf,
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Native => LineEnding::Native,
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}

impl Args {
    pub fn store_options(&self) -> StoreOptions {
        let unrecognized = if self.strict {
            UnrecognizedLines::Reject
        } else {
            UnrecognizedLines::Skip
        };
        StoreOptions {
            parse: ParseOptions { unrecognized },
            write: WriteOptions {
                line_ending: self.line_ending.into(),
            },
        }
    }
}
