use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A directory visited during traversal, with its immediate children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalNode {
    /// Path of the directory, rooted at the path the walk started from.
    pub path: PathBuf,
    /// Distance from the root; the root itself is 0.
    pub depth: usize,
    /// Names of immediate subdirectories, in traversal order.
    pub dirs: Vec<String>,
    /// Names of immediate files, in traversal order.
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Directory,
    File,
}

/// One line of the hierarchy listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLine {
    /// Indentation level the line is drawn at.
    pub depth: usize,
    pub kind: LineKind,
    /// Display name; directories carry a trailing `/`.
    pub name: String,
}

/// A file's banner and content in the dump section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// The full path of the file.
    pub path: PathBuf,
    /// Decoded text, or a `[Could not read file: ...]` placeholder.
    pub content: String,
    /// `false` when `content` is the placeholder.
    pub readable: bool,
}

/// Everything one run produced, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpReport {
    pub tree: Vec<TreeLine>,
    pub blocks: Vec<ContentBlock>,
    pub nodes: Vec<TraversalNode>,
}
