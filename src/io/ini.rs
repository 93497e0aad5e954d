use tracing::debug;

use super::ParseError;
use crate::{Document, Section};

/// What to do with lines that are neither a `[section]` header nor a
/// `key=value` entry inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognizedLines {
    /// Drop the line. Blank lines are always dropped.
    #[default]
    Skip,
    /// Fail with [`ParseError::UnrecognizedLine`].
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub unrecognized: UnrecognizedLines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native | LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    pub line_ending: LineEnding,
}

/// Parse INI text into a [`Document`].
///
/// Every line is trimmed. `[name]` opens a section (replacing an earlier one
/// with the same name); inside a section, `key=value` is split on the first
/// `=` and both halves are trimmed. Later duplicates of a key overwrite
/// earlier ones. `\n`, `\r\n` and bare `\r` all end a line. A leading UTF-8
/// byte-order mark is ignored.
pub fn parse_ini(text: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut doc = Document::new();
    let mut current: Option<Section> = None;

    for (index, raw_line) in split_lines(text).enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(name) = section_header(line) {
            if let Some(done) = current.replace(Section::new(name)) {
                doc.insert_section(done);
            }
            continue;
        }

        match (&mut current, line.split_once('=')) {
            (Some(section), Some((key, value))) => {
                section.insert(key.trim(), value.trim());
            }
            _ => match options.unrecognized {
                UnrecognizedLines::Skip => {
                    debug!(line = line_no, content = line, "skipping unrecognized line");
                }
                UnrecognizedLines::Reject => {
                    return Err(ParseError::UnrecognizedLine {
                        line: line_no,
                        content: line.to_string(),
                    });
                }
            },
        }
    }

    if let Some(done) = current {
        doc.insert_section(done);
    }

    Ok(doc)
}

/// Serialize a [`Document`] as INI text, sections and keys in stored order.
///
/// Nothing is escaped: names or values containing `=`, `[`, `]` or line
/// breaks will not read back the same.
pub fn write_ini(doc: &Document, options: &WriteOptions) -> String {
    let eol = options.line_ending.as_str();
    let mut out = String::new();

    for section in doc.sections() {
        out.push('[');
        out.push_str(section.name());
        out.push(']');
        out.push_str(eol);
        for (key, value) in section.iter() {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push_str(eol);
        }
    }

    out
}

fn section_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    Some(name.trim())
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}
