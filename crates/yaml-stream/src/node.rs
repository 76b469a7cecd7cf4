//! Document trees built by the loader.

use indexmap::IndexMap;

/// A materialized YAML node.
///
/// Scalars keep their text as written (no schema resolution), mapping keys
/// are the text of scalar keys in document order, and aliases stay named
/// references to their anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(String),
    Sequence(Vec<Node>),
    Mapping(IndexMap<String, Node>),
    Alias(String),
}

impl Node {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a mapping value by key. Returns None if this is not a
    /// mapping or the key is not present.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|entries| entries.get(key))
    }

    /// Get a sequence item by index.
    pub fn get_index(&self, index: usize) -> Option<&Node> {
        self.as_sequence().and_then(|items| items.get(index))
    }

    /// Number of children (sequence length or mapping entry count).
    pub fn len(&self) -> usize {
        match self {
            Node::Sequence(items) => items.len(),
            Node::Mapping(entries) => entries.len(),
            Node::Scalar(_) | Node::Alias(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_owned())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Node::Mapping(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_creation() {
        let node = Node::from("test");
        assert!(node.is_scalar());
        assert!(!node.is_sequence());
        assert!(!node.is_mapping());
        assert_eq!(node.as_str(), Some("test"));
        assert_eq!(node.len(), 0);
    }

    #[test]
    fn test_sequence_creation() {
        let node = Node::from(vec![Node::from("a"), Node::from("b")]);
        assert!(node.is_sequence());
        assert_eq!(node.len(), 2);
        assert_eq!(node.get_index(0).and_then(Node::as_str), Some("a"));
        assert_eq!(node.get_index(1).and_then(Node::as_str), Some("b"));
        assert!(node.get_index(2).is_none());
    }

    #[test]
    fn test_mapping_preserves_order() {
        let node: Node = [("title", Node::from("Doc")), ("author", Node::from("Ann"))]
            .into_iter()
            .collect();

        assert!(node.is_mapping());
        let keys: Vec<&str> = node.as_mapping().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "author"]);
        assert_eq!(node.get("author").and_then(Node::as_str), Some("Ann"));
        assert!(node.get("missing").is_none());
    }

    #[test]
    fn test_alias_has_no_children() {
        let node = Node::Alias("base".into());
        assert!(node.is_empty());
        assert_eq!(node.as_str(), None);
    }
}
