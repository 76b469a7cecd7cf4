//! Serializes [`Node`] trees back to YAML text.

use std::fs;
use std::path::Path;

use yaml_stream_events::{CollectionStyle, Event, EventKind};

use crate::emitter::Emitter;
use crate::error::{EmitError, Result};
use crate::node::Node;
use crate::sink::ChunkSink;

/// Write `documents` as one YAML stream.
///
/// Every document gets explicit `---` and `...` markers. Collections are
/// written in block style and scalars in whatever style the emitter picks
/// for their text, so [`load`](crate::load) reads back the same trees.
///
/// # Example
///
/// ```rust
/// use yaml_stream::{dump, Node};
///
/// assert_eq!(dump(&[Node::from("foo")]).unwrap(), "--- foo\n...\n");
/// ```
pub fn dump(documents: &[Node]) -> Result<String> {
    let mut output = String::new();
    {
        let mut sink = ChunkSink::new(|chunk: &str| {
            output.push_str(chunk);
            Ok(())
        });
        let mut emitter = Emitter::new(&mut sink);

        emitter.stream_start()?;
        for document in documents {
            emitter.document_start()?;
            emit_node(&mut emitter, document)?;
            emitter.document_end()?;
        }
        emitter.stream_end()?;
    }

    tracing::debug!(documents = documents.len(), len = output.len(), "dump finished");
    Ok(output)
}

/// [`dump`] `documents` and write the result to `path`.
pub fn dump_file(path: impl AsRef<Path>, documents: &[Node]) -> Result<()> {
    let path = path.as_ref();
    let content = dump(documents)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}

fn emit_node(emitter: &mut Emitter<'_>, node: &Node) -> std::result::Result<(), EmitError> {
    match node {
        Node::Scalar(value) => emitter.scalar(value.as_str()),
        Node::Alias(anchor) => emitter.alias(anchor.as_str()),
        Node::Sequence(items) => {
            emitter.emit(block_start(false))?;
            for item in items {
                emit_node(emitter, item)?;
            }
            emitter.sequence_end()
        }
        Node::Mapping(entries) => {
            emitter.emit(block_start(true))?;
            for (key, value) in entries {
                emitter.scalar(key.as_str())?;
                emit_node(emitter, value)?;
            }
            emitter.mapping_end()
        }
    }
}

fn block_start(mapping: bool) -> Event {
    let (anchor, tag, implicit, style) = (None, None, true, Some(CollectionStyle::Block));
    let kind = if mapping {
        EventKind::MappingStart {
            anchor,
            tag,
            implicit,
            style,
        }
    } else {
        EventKind::SequenceStart {
            anchor,
            tag,
            implicit,
            style,
        }
    };
    Event::new(kind)
}
