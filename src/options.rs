use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report file name used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "folder_dump.txt";

/// How bytes that are not valid UTF-8 are handled when reading file content.
///
/// Both policies are lossy: the report never fails because of encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodePolicy {
    /// Drop undecodable byte sequences.
    #[default]
    Ignore,
    /// Substitute U+FFFD for each undecodable sequence.
    Replace,
}

/// Order of sibling entries within a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryOrder {
    /// Whatever order the filesystem enumerates entries in.
    #[default]
    Filesystem,
    /// Sorted by file name, stable across platforms.
    Sorted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub decode: DecodePolicy,
    pub order: EntryOrder,
}
impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            decode: DecodePolicy::default(),
            order: EntryOrder::default(),
        }
    }
}
#[derive(Debug, Default)]
pub struct DumpBuilder {
    options: DumpOptions,
}
impl DumpBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DumpOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn decode(mut self, policy: DecodePolicy) -> Self {
        self.options.decode = policy;
        self
    }
    pub fn order(mut self, order: EntryOrder) -> Self {
        self.options.order = order;
        self
    }
    pub fn sorted(self, yes: bool) -> Self {
        self.order(if yes {
            EntryOrder::Sorted
        } else {
            EntryOrder::Filesystem
        })
    }
    pub fn build(self) -> DumpOptions {
        self.options
    }
}
