use crate::options::{DecodePolicy, DumpOptions, EntryOrder};
use crate::tree::build_tree_lines;
use crate::types::{ContentBlock, DumpReport, TraversalNode};
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &DumpOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder.standard_filters(false).follow_links(false);
        if options.order == EntryOrder::Sorted {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        Self {
            inner: builder.build(),
        }
    }
    /// Groups walk entries into one node per directory, in pre-order.
    ///
    /// Walk errors are skipped, so a missing root yields no nodes at all.
    fn collect_nodes(self) -> Vec<TraversalNode> {
        let mut nodes: Vec<TraversalNode> = Vec::new();
        let mut index: HashMap<PathBuf, usize> = HashMap::new();
        for result in self.inner {
            let entry = match result {
                Ok(entry) => entry,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable entry: {}", _e);
                    continue;
                }
            };
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if entry.depth() == 0 {
                if is_dir && listable(entry.path()) {
                    index.insert(entry.path().to_path_buf(), nodes.len());
                    nodes.push(new_node(entry.path(), 0));
                }
                continue;
            }
            let Some(parent) = entry.path().parent().and_then(|p| index.get(p)).copied() else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_dir && !listable(entry.path()) {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping unreadable directory: {}", entry.path().display());
                nodes[parent].dirs.push(name);
            } else if is_dir {
                #[cfg(feature = "logging")]
                tracing::debug!("Directory: {}", entry.path().display());
                nodes[parent].dirs.push(name);
                index.insert(entry.path().to_path_buf(), nodes.len());
                nodes.push(new_node(entry.path(), entry.depth()));
            } else if entry.path_is_symlink() && entry.path().is_dir() {
                // listed, never descended
                nodes[parent].dirs.push(name);
            } else {
                nodes[parent].files.push(name);
            }
        }
        nodes
    }
}
/// A directory gets a node only when its entries can be listed.
fn listable(path: &Path) -> bool {
    fs::read_dir(path).is_ok()
}
fn new_node(path: &Path, depth: usize) -> TraversalNode {
    TraversalNode {
        path: path.to_path_buf(),
        depth,
        dirs: Vec::new(),
        files: Vec::new(),
    }
}
/// Decodes bytes as UTF-8 without ever failing.
///
/// `\r\n` and lone `\r` line endings come out as `\n`.
pub(crate) fn decode(bytes: &[u8], policy: DecodePolicy) -> String {
    let text: String = match policy {
        DecodePolicy::Ignore => bytes.utf8_chunks().map(|chunk| chunk.valid()).collect(),
        DecodePolicy::Replace => String::from_utf8_lossy(bytes).into_owned(),
    };
    normalize_newlines(text)
}
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
/// Reads one file into a content block.
///
/// Open or read failures do not propagate; the block carries a placeholder
/// naming the error instead.
pub fn read_content(path: &Path, policy: DecodePolicy) -> ContentBlock {
    #[cfg(feature = "logging")]
    tracing::debug!("Reading file: {}", path.display());
    match fs::read(path) {
        Ok(bytes) => ContentBlock {
            path: path.to_path_buf(),
            content: decode(&bytes, policy),
            readable: true,
        },
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Could not read {}: {}", path.display(), e);
            ContentBlock {
                path: path.to_path_buf(),
                content: format!("[Could not read file: {}]", e),
                readable: false,
            }
        }
    }
}
/// Walks `options.root` and captures the tree listing and every file's content.
///
/// Nothing is written; see [`crate::output::dump`] for the full run.
pub fn generate(options: &DumpOptions) -> DumpReport {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting dump with root: {}", options.root.display());
    let nodes = Walker::new(options).collect_nodes();
    let tree = build_tree_lines(&options.root, &nodes);
    let blocks = nodes
        .iter()
        .flat_map(|node| node.files.iter().map(move |file| node.path.join(file)))
        .map(|path| read_content(&path, options.decode))
        .collect();
    DumpReport {
        tree,
        blocks,
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_policy_drops_invalid_bytes() {
        let bytes = b"ab\xffc\xc3\x28d";
        assert_eq!(decode(bytes, DecodePolicy::Ignore), "abc(d");
    }

    #[test]
    fn replace_policy_marks_invalid_bytes() {
        let bytes = b"ab\xffc";
        assert_eq!(decode(bytes, DecodePolicy::Replace), "ab\u{FFFD}c");
    }

    #[test]
    fn valid_text_is_untouched() {
        let text = "héllo\nwörld";
        assert_eq!(decode(text.as_bytes(), DecodePolicy::Ignore), text);
        assert_eq!(decode(text.as_bytes(), DecodePolicy::Replace), text);
    }

    #[test]
    fn line_endings_become_lf() {
        let bytes = b"a\r\nb\rc\n";
        assert_eq!(decode(bytes, DecodePolicy::Ignore), "a\nb\nc\n");
        assert_eq!(decode(bytes, DecodePolicy::Replace), "a\nb\nc\n");
    }

    #[test]
    fn invalid_byte_between_cr_and_lf_still_joins_them() {
        assert_eq!(decode(b"a\r\xff\nb", DecodePolicy::Ignore), "a\nb");
    }
}
