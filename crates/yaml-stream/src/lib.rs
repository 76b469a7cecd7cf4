//! # yaml-stream
//!
//! Streaming YAML parsing and emitting over a flat event stream.
//!
//! The [`parse`] function turns YAML text into [`Event`]s delivered one at a
//! time to a callback, and the [`Emitter`] turns such events back into text
//! delivered in chunks. Events carry everything needed to reproduce the
//! input's presentation: anchors, tags, scalar and collection styles,
//! implicit flags, and source [`Mark`]s.
//!
//! For callers that want whole documents, [`load`] builds a [`Node`] tree
//! per document and [`dump`] writes trees back out.
//!
//! ## Example
//!
//! ```rust
//! use yaml_stream::{parse_events, ChunkSink, Emitter};
//!
//! let events = parse_events("title: My Document\ntags: [a, b]\n").unwrap();
//!
//! let mut output = String::new();
//! {
//!     let mut sink = ChunkSink::new(|chunk: &str| {
//!         output.push_str(chunk);
//!         Ok(())
//!     });
//!     let mut emitter = Emitter::new(&mut sink);
//!     for event in events {
//!         emitter.emit(event).unwrap();
//!     }
//! }
//! assert_eq!(output, "title: My Document\ntags: [a, b]\n");
//! ```

mod bridge;
mod config;
mod dumper;
mod emitter;
mod error;
mod loader;
mod node;
mod parser;
mod sink;

pub use config::EmitterConfig;
pub use dumper::{dump, dump_file};
pub use emitter::Emitter;
pub use error::{BoxError, EmitError, Error, ParseError, ParseErrorKind, Result};
pub use loader::{load, load_file};
pub use node::Node;
pub use parser::{parse, parse_events};
pub use sink::ChunkSink;
pub use yaml_stream_events::{CollectionStyle, Event, EventKind, Mark, ScalarStyle, Version};
