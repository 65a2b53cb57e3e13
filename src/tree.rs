//! Internal module for turning traversal nodes into indented tree lines.

use crate::types::{LineKind, TraversalNode, TreeLine};
use std::fmt;
use std::path::Path;

const PIPE: &str = "│   ";
const BRANCH: &str = "├── ";

/// Builds the hierarchy listing from nodes in pre-order.
///
/// Each node contributes its own directory line followed by one line per file it
/// holds. Subdirectories appear later as their own nodes.
pub(crate) fn build_tree_lines(root: &Path, nodes: &[TraversalNode]) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    for node in nodes {
        let name = if node.depth == 0 {
            display_name(root)
        } else {
            display_name(&node.path)
        };
        lines.push(TreeLine {
            depth: node.depth,
            kind: LineKind::Directory,
            name: format!("{}/", name),
        });
        for file in &node.files {
            lines.push(TreeLine {
                depth: node.depth + 1,
                kind: LineKind::File,
                name: file.clone(),
            });
        }
    }
    lines
}

/// Final path component, or the whole path when it has none (`.`, `/`).
fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Indentation drawn before an entry at `depth`; the root gets none.
pub(crate) fn prefix(depth: usize) -> String {
    if depth == 0 {
        String::new()
    } else {
        PIPE.repeat(depth - 1) + BRANCH
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", prefix(self.depth), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn node(path: &str, depth: usize, files: &[&str]) -> TraversalNode {
        TraversalNode {
            path: PathBuf::from(path),
            depth,
            dirs: Vec::new(),
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn prefix_grows_with_depth() {
        assert_eq!(prefix(0), "");
        assert_eq!(prefix(1), "├── ");
        assert_eq!(prefix(3), "│   │   ├── ");
    }

    #[test]
    fn files_sit_one_level_below_their_directory() {
        let nodes = vec![
            node("proj", 0, &["README.md"]),
            node("proj/src", 1, &["main.rs"]),
        ];
        let rendered: Vec<String> = build_tree_lines(Path::new("proj"), &nodes)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            vec!["proj/", "├── README.md", "├── src/", "│   ├── main.rs"]
        );
    }

    #[test]
    fn root_without_file_name_uses_path_as_given() {
        let nodes = vec![node(".", 0, &[])];
        let lines = build_tree_lines(Path::new("."), &nodes);
        assert_eq!(lines[0].to_string(), "./");
        assert_eq!(lines[0].kind, LineKind::Directory);
    }
}
