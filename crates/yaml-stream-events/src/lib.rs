//! Event vocabulary for streaming YAML.
//!
//! This crate is the shared data model of the `yaml-stream` parser and
//! emitter. A YAML stream is represented as a flat, ordered sequence of
//! [`Event`]s; every event carries the [`Mark`]s delimiting the source span
//! it was produced from.
//!
//! # Overview
//!
//! - [`Event`]: one structural occurrence plus its `start`/`end` marks
//! - [`EventKind`]: the closed set of event types and their payloads
//! - [`Mark`]: a position (character index, line, column, all 0-based)
//! - [`ScalarStyle`], [`CollectionStyle`]: presentation styles
//! - [`Version`]: a `%YAML` directive
//!
//! Events serialize (via serde) to a flat record with a `type`
//! discriminator:
//!
//! ```rust
//! use yaml_stream_events::{Event, EventKind};
//!
//! let event = Event::new(EventKind::plain_scalar("foo"));
//! let json = serde_json::to_value(&event).unwrap();
//! assert_eq!(json["type"], "scalar");
//! assert_eq!(json["value"], "foo");
//! ```

mod event;
mod mark;
mod style;

pub use event::{Event, EventKind, Version};
pub use mark::Mark;
pub use style::{CollectionStyle, ScalarStyle};
