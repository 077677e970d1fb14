//! Node representation in the intermediate tree

use serde::{Deserialize, Serialize};

/// Identifier of a node within one intermediate document
///
/// Serializes as a plain string. Either taken verbatim from the source
/// record (e.g. a Slack user id) or issued by an `IdGenerator`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeUid(String);

impl NodeUid {
    /// Create a NodeUid from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeUid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeUid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Distinguishes ordinary nodes from key/value field nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Node,
    Field,
}

/// A node in the intermediate tree
///
/// Children are owned exclusively by their parent. `refs` and `supertags`
/// hold uids only; `None` means the key is left out of the JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntermediateNode {
    pub uid: NodeUid,
    pub name: String,
    #[serde(default)]
    pub children: Vec<IntermediateNode>,
    /// Unix epoch milliseconds
    pub created_at: i64,
    /// Unix epoch milliseconds
    pub edited_at: i64,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertags: Option<Vec<NodeUid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refs: Option<Vec<NodeUid>>,
}

impl IntermediateNode {
    pub fn is_field(&self) -> bool {
        self.node_type == NodeType::Field
    }

    /// The value of a field node: the name of its first child.
    pub fn field_value(&self) -> Option<&str> {
        if !self.is_field() {
            return None;
        }
        self.children.first().map(|c| c.name.as_str())
    }

    /// Field children of this node, in order.
    pub fn fields(&self) -> impl Iterator<Item = &IntermediateNode> {
        self.children.iter().filter(|c| c.is_field())
    }

    /// Look up the value of the first field child with the given name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields()
            .find(|f| f.name == name)
            .and_then(|f| f.field_value())
    }

    /// Depth-first pre-order walk over this node and everything below it.
    pub fn descendants(&self) -> impl Iterator<Item = &IntermediateNode> {
        Descendants { stack: vec![self] }
    }
}

struct Descendants<'a> {
    stack: Vec<&'a IntermediateNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a IntermediateNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(uid: &str, name: &str, node_type: NodeType) -> IntermediateNode {
        IntermediateNode {
            uid: NodeUid::from(uid),
            name: name.to_string(),
            children: Vec::new(),
            created_at: 0,
            edited_at: 0,
            node_type,
            supertags: None,
            refs: None,
        }
    }

    #[test]
    fn field_value_reads_first_child() {
        let mut field = node("f", "tz", NodeType::Field);
        field.children.push(node("v", "Europe/Oslo", NodeType::Node));

        assert_eq!(field.field_value(), Some("Europe/Oslo"));
    }

    #[test]
    fn plain_node_has_no_field_value() {
        let mut plain = node("n", "Users", NodeType::Node);
        plain.children.push(node("c", "child", NodeType::Node));

        assert_eq!(plain.field_value(), None);
    }

    #[test]
    fn field_lookup_by_name() {
        let mut user = node("U1", "Alice", NodeType::Node);
        let mut tz = node("f1", "tz", NodeType::Field);
        tz.children.push(node("v1", "UTC", NodeType::Node));
        let mut deleted = node("f2", "deleted", NodeType::Field);
        deleted.children.push(node("v2", "false", NodeType::Node));
        user.children.push(tz);
        user.children.push(deleted);

        assert_eq!(user.field("deleted"), Some("false"));
        assert_eq!(user.field("missing"), None);
        assert_eq!(user.fields().count(), 2);
    }

    #[test]
    fn descendants_walk_in_pre_order() {
        let mut root = node("r", "root", NodeType::Node);
        let mut a = node("a", "a", NodeType::Node);
        a.children.push(node("a1", "a1", NodeType::Node));
        root.children.push(a);
        root.children.push(node("b", "b", NodeType::Node));

        let order: Vec<&str> = root.descendants().map(|n| n.uid.as_str()).collect();
        assert_eq!(order, vec!["r", "a", "a1", "b"]);
    }
}
