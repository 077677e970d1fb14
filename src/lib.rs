//! slack-tana: Slack export to Tana Intermediate File converter
//!
//! Reads a Slack workspace export directory and produces a single document:
//! a tree of typed nodes plus supertag and attribute catalogs and summary
//! counters.
//!
//! # Core Concepts
//!
//! - **Nodes**: `node` or `field` typed; a field's single child holds its value
//! - **Containers**: one root node per converted collection (e.g. "Users")
//! - **Supertags**: document-level tag types nodes refer to by uid
//!
//! # Example
//!
//! ```no_run
//! use slack_tana::{convert, write_intermediate_file};
//!
//! let file = convert("./slack-export")?;
//! if !file.is_empty() {
//!     write_intermediate_file("workspace", &file)?;
//! }
//! # Ok::<(), slack_tana::ConvertError>(())
//! ```

pub mod config;
pub mod intermediate;
pub mod output;
pub mod slack;

pub use config::{ConverterConfig, IdStrategy};
pub use intermediate::{
    Attribute, Clock, IntermediateFile, IntermediateNode, NodeFactory, NodeType, NodeUid, Summary,
    Supertag,
};
pub use output::{output_path, write_intermediate_file};
pub use slack::{convert, ConvertError, ConvertResult, SlackConverter, SlackUser};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
