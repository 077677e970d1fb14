//! NodeFactory: constructs nodes with fresh uids and timestamps

use super::node::{IntermediateNode, NodeType, NodeUid};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of fresh node identifiers
pub trait IdGenerator: Send {
    fn next_uid(&mut self) -> NodeUid;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_uid(&mut self) -> NodeUid {
        NodeUid::from(Uuid::new_v4().to_string())
    }
}

/// `<prefix>-1`, `<prefix>-2`, ... in issue order
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("node")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_uid(&mut self) -> NodeUid {
        let uid = NodeUid::from(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        uid
    }
}

/// Where node timestamps come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(at) => *at,
        }
    }

    /// Current time as Unix epoch milliseconds
    pub fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Builds intermediate nodes
///
/// Every node created here consumes one uid from the generator. Nodes whose
/// uid comes from the source (see [`NodeFactory::make_node_with_uid`]) do not.
pub struct NodeFactory {
    ids: Box<dyn IdGenerator>,
    clock: Clock,
}

impl NodeFactory {
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self {
            ids: Box::new(ids),
            clock: Clock::System,
        }
    }

    /// Factory issuing sequential uids, for reproducible output
    pub fn sequential(prefix: impl Into<String>) -> Self {
        Self::new(SequentialIdGenerator::new(prefix))
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// A node with a fresh uid and empty children, refs and supertags.
    pub fn make_node(&mut self, node_type: NodeType, name: impl Into<String>) -> IntermediateNode {
        let uid = self.ids.next_uid();
        let mut node = self.make_node_with_uid(uid, name);
        node.node_type = node_type;
        node.refs = Some(Vec::new());
        node.supertags = Some(Vec::new());
        node
    }

    /// A plain node keyed by a caller-supplied uid.
    ///
    /// `refs` and `supertags` are left unset; callers add what they need.
    pub fn make_node_with_uid(
        &mut self,
        uid: impl Into<NodeUid>,
        name: impl Into<String>,
    ) -> IntermediateNode {
        let now = self.clock.now_millis();
        IntermediateNode {
            uid: uid.into(),
            name: name.into(),
            children: Vec::new(),
            created_at: now,
            edited_at: now,
            node_type: NodeType::Node,
            supertags: None,
            refs: None,
        }
    }

    /// A field node whose single child holds `value` as its name.
    pub fn make_field(&mut self, name: impl Into<String>, value: impl Into<String>) -> IntermediateNode {
        let mut field = self.make_node(NodeType::Field, name);
        let value = self.make_node(NodeType::Node, value);
        field.children.push(value);
        field
    }
}

impl Default for NodeFactory {
    fn default() -> Self {
        Self::new(UuidIdGenerator)
    }
}

impl std::fmt::Debug for NodeFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeFactory")
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
