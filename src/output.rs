//! Output formatting for dump reports.
//!
//! The text format is the report file layout: a tree section followed by one
//! banner-delimited block per file. JSON is the serialized [`DumpReport`].

use crate::engine::generate;
use crate::{DumpError, DumpOptions, DumpReport};
use crate::types::ContentBlock;
use std::fs;
use std::path::Path;

pub const TREE_HEADER: &str = "### DIRECTORY TREE ###";
pub const CONTENTS_HEADER: &str = "### FILE CONTENTS ###";
const RULE_WIDTH: usize = 80;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the report into a string.
pub fn format_report(
    report: &DumpReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, DumpError> {
    match format {
        OutputFormat::Text => Ok(format_text(report)),
        OutputFormat::Json => format_json(report, pretty),
    }
}

/// Writes the formatted report to `path`, replacing any existing file.
pub fn write_report(
    report: &DumpReport,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), DumpError> {
    let content = format_report(report, format, pretty)?;
    fs::write(&path, content).map_err(|e| DumpError::io(path.as_ref(), e))?;
    Ok(())
}

/// Generates the report for `options.root` and writes it as text to `options.output`.
///
/// A file that cannot be read only costs its own block; failing to write the
/// output aborts the run.
pub fn dump(options: &DumpOptions) -> Result<DumpReport, DumpError> {
    let report = generate(options);
    write_report(&report, OutputFormat::Text, &options.output, false)?;
    Ok(report)
}

/// Renders one file's block: banner with the full path, then the content.
pub fn format_block(block: &ContentBlock) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{rule}\nFILE: {}\n{rule}\n\n{}",
        block.path.display(),
        block.content
    )
}

// ----------------------- Internal formatting -----------------------

fn format_text(report: &DumpReport) -> String {
    let tree: Vec<String> = report.tree.iter().map(ToString::to_string).collect();
    let blocks: Vec<String> = report.blocks.iter().map(format_block).collect();

    let mut out = String::with_capacity(1024);
    out.push_str(TREE_HEADER);
    out.push_str("\n\n");
    out.push_str(&tree.join("\n"));
    out.push_str("\n\n");
    out.push_str(CONTENTS_HEADER);
    out.push_str("\n\n");
    out.push_str(&blocks.join("\n"));
    out
}

fn format_json(report: &DumpReport, pretty: bool) -> Result<String, DumpError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineKind, TreeLine};
    use std::path::PathBuf;

    fn sample() -> DumpReport {
        DumpReport {
            tree: vec![
                TreeLine {
                    depth: 0,
                    kind: LineKind::Directory,
                    name: "root/".into(),
                },
                TreeLine {
                    depth: 1,
                    kind: LineKind::File,
                    name: "a.txt".into(),
                },
            ],
            blocks: vec![ContentBlock {
                path: PathBuf::from("root/a.txt"),
                content: "hi".into(),
                readable: true,
            }],
            nodes: Vec::new(),
        }
    }

    #[test]
    fn text_layout_matches_report_file() {
        let rule = "=".repeat(80);
        let expected = format!(
            "### DIRECTORY TREE ###\n\nroot/\n├── a.txt\n\n### FILE CONTENTS ###\n\n\n{rule}\nFILE: root/a.txt\n{rule}\n\nhi"
        );
        assert_eq!(format_text(&sample()), expected);
    }

    #[test]
    fn empty_report_keeps_both_headers() {
        let out = format_text(&DumpReport::default());
        assert_eq!(out, "### DIRECTORY TREE ###\n\n\n\n### FILE CONTENTS ###\n\n");
    }

    #[test]
    fn json_round_trips() {
        let json = format_report(&sample(), OutputFormat::Json, true).unwrap();
        let back: DumpReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
