//! Course-type master hierarchy.
//!
//! The master is an ordered tree of named nodes whose leaves are course-id
//! prefixes. A `category` rule names a major node and optionally a middle
//! and minor node beneath it; the rule then matches any course whose id
//! starts with one of the leaf prefixes under the selected node.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The whole hierarchy: a list of major-category nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CourseTypeMaster {
    pub roots: Vec<CourseTypeNode>,
}

/// A named node of the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CourseTypeNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<CourseTypeEntry>,
}

/// A child is either a nested node or a leaf id prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CourseTypeEntry {
    Prefix(String),
    Node(CourseTypeNode),
}

impl CourseTypeNode {
    /// Create a node with only leaf prefixes.
    pub fn leaf(name: impl Into<String>, prefixes: &[&str]) -> Self {
        Self {
            name: name.into(),
            children: prefixes
                .iter()
                .map(|p| CourseTypeEntry::Prefix(p.to_string()))
                .collect(),
        }
    }

    /// Create a node with only nested nodes.
    pub fn branch(name: impl Into<String>, nodes: Vec<CourseTypeNode>) -> Self {
        Self {
            name: name.into(),
            children: nodes.into_iter().map(CourseTypeEntry::Node).collect(),
        }
    }

    /// Direct child node with the given name.
    pub fn child(&self, name: &str) -> Option<&CourseTypeNode> {
        self.child_nodes().find(|n| n.name == name)
    }

    /// Direct child nodes, skipping leaf prefixes.
    pub fn child_nodes(&self) -> impl Iterator<Item = &CourseTypeNode> {
        self.children.iter().filter_map(|c| match c {
            CourseTypeEntry::Node(n) => Some(n),
            CourseTypeEntry::Prefix(_) => None,
        })
    }

    /// Append every leaf prefix under this node, depth first.
    fn collect_prefixes(&self, out: &mut Vec<String>) {
        for child in &self.children {
            match child {
                CourseTypeEntry::Prefix(p) => {
                    if !out.contains(p) {
                        out.push(p.clone());
                    }
                }
                CourseTypeEntry::Node(n) => n.collect_prefixes(out),
            }
        }
    }
}

impl CourseTypeMaster {
    /// Create a master from its major-category nodes.
    pub fn new(roots: Vec<CourseTypeNode>) -> Self {
        Self { roots }
    }

    /// Whether the master holds no data (e.g. the lookup never completed).
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Resolve a category selection to the id prefixes it covers.
    ///
    /// An omitted level includes everything under the shallower node. A
    /// minor category given without a middle one is searched under every
    /// middle node of the major. Unknown names resolve to an empty set.
    pub fn resolve(&self, major: &str, middle: Option<&str>, minor: Option<&str>) -> Vec<String> {
        let Some(major_node) = self.roots.iter().find(|n| n.name == major) else {
            return Vec::new();
        };

        let selected: Vec<&CourseTypeNode> = match (middle, minor) {
            (None, None) => vec![major_node],
            (Some(mid), None) => major_node.child(mid).into_iter().collect(),
            (Some(mid), Some(min)) => major_node
                .child(mid)
                .and_then(|n| n.child(min))
                .into_iter()
                .collect(),
            (None, Some(min)) => major_node
                .child_nodes()
                .filter_map(|n| n.child(min))
                .collect(),
        };

        let mut prefixes = Vec::new();
        for node in selected {
            node.collect_prefixes(&mut prefixes);
        }
        prefixes
    }
}
