//! Record and collection mapping
//!
//! A record becomes one leaf node keyed by its source id, tagged with its
//! kind's supertag and carrying one field child per declared field. A
//! collection becomes a container node holding those leaves. Both return the
//! summary delta they produced instead of mutating shared counters.

use super::records::{SlackRecord, SlackUser};
use crate::intermediate::{IntermediateNode, NodeFactory, NodeUid, Summary};

/// Optional cut of names to their first N characters
///
/// Applies to the node label and the `UserName` field. Off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameTruncation(Option<usize>);

impl NameTruncation {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn to(chars: usize) -> Self {
        Self(Some(chars))
    }

    pub fn apply(&self, name: &str) -> String {
        match self.0 {
            Some(limit) => name.chars().take(limit).collect(),
            None => name.to_string(),
        }
    }
}

impl From<Option<usize>> for NameTruncation {
    fn from(limit: Option<usize>) -> Self {
        Self(limit)
    }
}

/// Field names whose values are subject to name truncation
const NAME_FIELDS: &[&str] = &["UserName"];

/// A mapped node together with the counters it contributed
#[derive(Debug, Clone, PartialEq)]
pub struct Mapped {
    pub node: IntermediateNode,
    pub summary: Summary,
}

/// Map one record into a leaf node.
pub fn map_record<R: SlackRecord>(
    record: &R,
    factory: &mut NodeFactory,
    truncation: NameTruncation,
) -> Mapped {
    let mut node = factory.make_node_with_uid(record.uid(), truncation.apply(record.display_name()));
    node.supertags = Some(vec![NodeUid::from(R::KIND.supertag_uid())]);

    for (name, value) in record.field_values() {
        let value = if NAME_FIELDS.contains(&name) {
            truncation.apply(&value)
        } else {
            value
        };
        node.children.push(factory.make_field(name, value));
    }

    let fields = node.children.len();
    Mapped {
        node,
        summary: Summary::leaf(fields),
    }
}

/// Map a whole collection under its container node.
///
/// The container counts as one top-level node even when `records` is empty.
pub fn map_collection<R: SlackRecord>(
    records: &[R],
    factory: &mut NodeFactory,
    truncation: NameTruncation,
) -> Mapped {
    let kind = R::KIND;
    let mut summary = Summary::top_level();
    let mut container = factory.make_node_with_uid(kind.container_uid(), kind.container_name());

    for record in records {
        let mapped = map_record(record, factory, truncation);
        summary += mapped.summary;
        container.children.push(mapped.node);
    }

    Mapped {
        node: container,
        summary,
    }
}

pub fn map_user(user: &SlackUser, factory: &mut NodeFactory, truncation: NameTruncation) -> Mapped {
    map_record(user, factory, truncation)
}

pub fn map_user_collection(
    users: &[SlackUser],
    factory: &mut NodeFactory,
    truncation: NameTruncation,
) -> Mapped {
    map_collection(users, factory, truncation)
}
