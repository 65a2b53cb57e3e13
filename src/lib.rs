//! # Treedump
//!
//! `treedump` walks a directory tree and writes a single report file holding an
//! indented listing of every directory and file, followed by the text content of
//! each file under a banner naming its full path.
//!
//! Files that cannot be read get a placeholder block instead of aborting the run;
//! bytes that are not valid UTF-8 are dropped (or replaced, see [`DecodePolicy`]).
//! Only a failure to write the report itself is an error.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treedump::{DumpBuilder, EntryOrder, dump};
//!
//! let options = DumpBuilder::new("./project")
//!     .output("folder_dump.txt")
//!     .order(EntryOrder::Sorted)
//!     .build();
//!
//! let report = dump(&options).expect("Failed to write report");
//! println!("{} files dumped", report.blocks.len());
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{generate, read_content};
pub use error::DumpError;
pub use options::{DEFAULT_OUTPUT, DecodePolicy, DumpBuilder, DumpOptions, EntryOrder};
pub use output::{OutputFormat, dump, write_report};
pub use types::{ContentBlock, DumpReport, LineKind, TraversalNode, TreeLine};
