//! Builds [`Node`] trees from the parser's event stream.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use yaml_stream_events::{Event, EventKind, Mark};

use crate::error::{Error, Result};
use crate::node::Node;
use crate::parser::{self, Stop};

/// Parse every document in `input` into a [`Node`] tree.
///
/// Scalars stay text, sequences become lists, and mappings keep their keys
/// in document order. Aliases are kept as [`Node::Alias`] references,
/// except in key position, where an alias to a scalar becomes that
/// scalar's text.
///
/// # Example
///
/// ```rust
/// use yaml_stream::load;
///
/// let docs = load("title: My Document\ntags: [a, b]\n---\nsecond").unwrap();
/// assert_eq!(docs.len(), 2);
/// assert_eq!(docs[0].get("title").and_then(|n| n.as_str()), Some("My Document"));
/// assert_eq!(docs[0].get("tags").map(|n| n.len()), Some(2));
/// assert_eq!(docs[1].as_str(), Some("second"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed input and [`Error::Load`] for a
/// mapping key that is neither a scalar nor an alias to one. Documents built before the failure
/// are discarded.
pub fn load(input: &str) -> Result<Vec<Node>> {
    let mut builder = TreeBuilder::new();

    parser::drive(input, |event| builder.on_event(event)).map_err(|stop| match stop {
        Stop::Parse(err) => Error::Parse(err),
        Stop::Handler(err) => err,
    })?;

    builder.finish()
}

/// Read a file and [`load`] its contents.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Node>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), len = content.len(), "loading file");
    load(&content)
}

/// Receives parser events and assembles one tree per document.
struct TreeBuilder {
    /// Collections still waiting for their end event
    stack: Vec<BuildNode>,

    /// Root of the document being built
    root: Option<Node>,

    /// Finished documents
    documents: Vec<Node>,

    /// Text of the anchored scalars seen so far in this document
    scalar_anchors: HashMap<String, String>,

    /// Start of the most recent event, for errors at end of stream
    last_mark: Mark,
}

/// A collection being constructed during parsing.
enum BuildNode {
    Sequence {
        items: Vec<Node>,
    },

    Mapping {
        entries: IndexMap<String, Node>,
        /// Key read but not yet paired with its value
        pending_key: Option<String>,
    },
}

impl BuildNode {
    fn type_name(&self) -> &'static str {
        match self {
            BuildNode::Sequence { .. } => "sequence",
            BuildNode::Mapping { .. } => "mapping",
        }
    }
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
            documents: Vec::new(),
            scalar_anchors: HashMap::new(),
            last_mark: Mark::default(),
        }
    }

    fn finish(self) -> Result<Vec<Node>> {
        if let Some(open) = self.stack.last() {
            return Err(Error::Load {
                message: format!("unterminated {}", open.type_name()),
                mark: self.last_mark,
            });
        }
        if self.root.is_some() {
            return Err(Error::Load {
                message: "unterminated document".into(),
                mark: self.last_mark,
            });
        }

        tracing::debug!(documents = self.documents.len(), "load finished");
        Ok(self.documents)
    }

    fn on_event(&mut self, event: Event) -> Result<()> {
        let mark = event.start;
        self.last_mark = mark;

        match event.kind {
            EventKind::StreamStart | EventKind::StreamEnd => {}

            // Anchors do not carry across documents
            EventKind::DocumentStart { .. } => self.scalar_anchors.clear(),

            EventKind::DocumentEnd { .. } => {
                let root = self.root.take().ok_or_else(|| Error::Load {
                    message: "document has no content".into(),
                    mark,
                })?;
                self.documents.push(root);
            }

            EventKind::Scalar { anchor, value, .. } => {
                if let Some(anchor) = anchor {
                    self.scalar_anchors.insert(anchor, value.clone());
                }
                self.push_complete(Node::Scalar(value), mark)?;
            }

            EventKind::Alias { anchor } => self.push_complete(Node::Alias(anchor), mark)?,

            EventKind::SequenceStart { anchor, .. } => {
                self.forget_anchor(anchor.as_deref());
                self.stack.push(BuildNode::Sequence { items: Vec::new() });
            }

            EventKind::MappingStart { anchor, .. } => {
                self.forget_anchor(anchor.as_deref());
                self.stack.push(BuildNode::Mapping {
                    entries: IndexMap::new(),
                    pending_key: None,
                });
            }

            EventKind::SequenceEnd => match self.stack.pop() {
                Some(BuildNode::Sequence { items }) => {
                    self.push_complete(Node::Sequence(items), mark)?;
                }
                other => return Err(mismatched_end("sequence", other.as_ref(), mark)),
            },

            EventKind::MappingEnd => match self.stack.pop() {
                Some(BuildNode::Mapping {
                    entries,
                    pending_key: None,
                }) => {
                    self.push_complete(Node::Mapping(entries), mark)?;
                }
                Some(BuildNode::Mapping {
                    pending_key: Some(key),
                    ..
                }) => {
                    return Err(Error::Load {
                        message: format!("mapping key '{key}' has no value"),
                        mark,
                    });
                }
                other => return Err(mismatched_end("mapping", other.as_ref(), mark)),
            },
        }

        Ok(())
    }

    /// A collection anchor replaces any scalar of the same name.
    fn forget_anchor(&mut self, anchor: Option<&str>) {
        if let Some(anchor) = anchor {
            self.scalar_anchors.remove(anchor);
        }
    }

    /// Attach a finished node to the innermost open collection, or make it
    /// the document root.
    fn push_complete(&mut self, node: Node, mark: Mark) -> Result<()> {
        let scalar_anchors = &self.scalar_anchors;
        let Some(parent) = self.stack.last_mut() else {
            if self.root.is_some() {
                return Err(Error::Load {
                    message: "document has more than one root node".into(),
                    mark,
                });
            }
            self.root = Some(node);
            return Ok(());
        };

        match parent {
            BuildNode::Sequence { items } => items.push(node),
            BuildNode::Mapping {
                entries,
                pending_key,
            } => match pending_key.take() {
                // Later duplicates replace earlier values
                Some(key) => {
                    entries.insert(key, node);
                }
                None => match node {
                    Node::Scalar(key) => *pending_key = Some(key),
                    Node::Alias(anchor) if scalar_anchors.contains_key(&anchor) => {
                        *pending_key = Some(scalar_anchors[&anchor].clone());
                    }
                    other => {
                        return Err(Error::Load {
                            message: format!(
                                "mapping keys must be scalars, found {}",
                                node_type_name(&other)
                            ),
                            mark,
                        });
                    }
                },
            },
        }

        Ok(())
    }
}

fn mismatched_end(expected: &str, found: Option<&BuildNode>, mark: Mark) -> Error {
    let message = match found {
        Some(open) => format!("{expected} end while a {} is open", open.type_name()),
        None => format!("{expected} end without a matching start"),
    };
    Error::Load { message, mark }
}

fn node_type_name(node: &Node) -> &'static str {
    match node {
        Node::Scalar(_) => "scalar",
        Node::Sequence(_) => "sequence",
        Node::Mapping(_) => "mapping",
        Node::Alias(_) => "alias",
    }
}
