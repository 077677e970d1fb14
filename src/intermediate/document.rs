//! IntermediateFile: the document root and its catalogs

use super::node::{IntermediateNode, NodeUid};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Format string written into every document
const FORMAT_VERSION: &str = "TanaIntermediateFile V0.1";

/// A named tag type, referenced from nodes by uid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supertag {
    pub uid: NodeUid,
    pub name: String,
}

impl Supertag {
    pub fn new(uid: impl Into<NodeUid>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
        }
    }
}

/// A declared field name
///
/// `values` is reserved for enumerating observed values and is written empty.
/// `count` is the number of field nodes carrying this name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
    pub count: usize,
}

impl Attribute {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            count,
        }
    }
}

/// Aggregate counters for a conversion run
///
/// Mapping functions return the delta they produced; callers fold deltas
/// together with `+=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_nodes: usize,
    pub leaf_nodes: usize,
    pub top_level_nodes: usize,
    pub calendar_nodes: usize,
    pub fields: usize,
    pub broken_refs: usize,
}

impl Summary {
    /// Counters for a single leaf record carrying `fields` field nodes.
    pub fn leaf(fields: usize) -> Self {
        Self {
            total_nodes: 1,
            leaf_nodes: 1,
            fields,
            ..Default::default()
        }
    }

    /// Counters for one root-level container.
    pub fn top_level() -> Self {
        Self {
            top_level_nodes: 1,
            ..Default::default()
        }
    }
}

impl AddAssign for Summary {
    fn add_assign(&mut self, other: Self) {
        self.total_nodes += other.total_nodes;
        self.leaf_nodes += other.leaf_nodes;
        self.top_level_nodes += other.top_level_nodes;
        self.calendar_nodes += other.calendar_nodes;
        self.fields += other.fields;
        self.broken_refs += other.broken_refs;
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "totalNodes:    {}", self.total_nodes)?;
        writeln!(f, "leafNodes:     {}", self.leaf_nodes)?;
        writeln!(f, "topLevelNodes: {}", self.top_level_nodes)?;
        writeln!(f, "calendarNodes: {}", self.calendar_nodes)?;
        writeln!(f, "fields:        {}", self.fields)?;
        write!(f, "brokenRefs:    {}", self.broken_refs)
    }
}

/// The document emitted by a conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntermediateFile {
    pub version: String,
    pub summary: Summary,
    pub nodes: Vec<IntermediateNode>,
    pub supertags: Vec<Supertag>,
    pub attributes: Vec<Attribute>,
}

impl IntermediateFile {
    pub fn new(
        summary: Summary,
        nodes: Vec<IntermediateNode>,
        supertags: Vec<Supertag>,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            summary,
            nodes,
            supertags,
            attributes,
        }
    }

    /// True when no root-level nodes were produced.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
