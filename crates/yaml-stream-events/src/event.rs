//! The event type.

use crate::{CollectionStyle, Mark, ScalarStyle};
use serde::{Deserialize, Serialize};

/// One structural occurrence in a YAML stream, with its source span.
///
/// For events produced by the parser, `start` and `end` delimit the text
/// the event was read from. For events handed to the emitter they are
/// informational only and may be left at their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(flatten)]
    pub kind: EventKind,

    #[serde(default)]
    pub start: Mark,

    #[serde(default)]
    pub end: Mark,
}

/// The `%YAML major.minor` directive of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

fn implicit_by_default() -> bool {
    true
}

/// The closed set of event types.
///
/// `style: None` means "no explicit style": the parser always reports a
/// concrete style, while the emitter lets the engine choose one.
///
/// When deserialized, missing `implicit` flags default to `false` on
/// document events (explicit `---`/`...` markers) and to `true` on scalars
/// and collections (no tag needs to be written).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventKind {
    StreamStart,

    StreamEnd,

    DocumentStart {
        #[serde(default)]
        version: Option<Version>,
        #[serde(default)]
        implicit: bool,
    },

    DocumentEnd {
        #[serde(default)]
        implicit: bool,
    },

    Alias {
        anchor: String,
    },

    Scalar {
        #[serde(default)]
        anchor: Option<String>,
        #[serde(default)]
        tag: Option<String>,
        /// Scalar content. May contain any character, including NUL.
        value: String,
        /// The tag may be omitted when the scalar is written plain.
        #[serde(default = "implicit_by_default")]
        plain_implicit: bool,
        /// The tag may be omitted when the scalar is written in any
        /// non-plain style.
        #[serde(default = "implicit_by_default")]
        quoted_implicit: bool,
        #[serde(default)]
        style: Option<ScalarStyle>,
    },

    SequenceStart {
        #[serde(default)]
        anchor: Option<String>,
        #[serde(default)]
        tag: Option<String>,
        #[serde(default = "implicit_by_default")]
        implicit: bool,
        #[serde(default)]
        style: Option<CollectionStyle>,
    },

    SequenceEnd,

    MappingStart {
        #[serde(default)]
        anchor: Option<String>,
        #[serde(default)]
        tag: Option<String>,
        #[serde(default = "implicit_by_default")]
        implicit: bool,
        #[serde(default)]
        style: Option<CollectionStyle>,
    },

    MappingEnd,
}

impl EventKind {
    /// The `type` discriminator of the serialized record.
    pub const fn type_name(&self) -> &'static str {
        match self {
            EventKind::StreamStart => "streamStart",
            EventKind::StreamEnd => "streamEnd",
            EventKind::DocumentStart { .. } => "documentStart",
            EventKind::DocumentEnd { .. } => "documentEnd",
            EventKind::Alias { .. } => "alias",
            EventKind::Scalar { .. } => "scalar",
            EventKind::SequenceStart { .. } => "sequenceStart",
            EventKind::SequenceEnd => "sequenceEnd",
            EventKind::MappingStart { .. } => "mappingStart",
            EventKind::MappingEnd => "mappingEnd",
        }
    }

    /// An untagged scalar whose style is left to the emitter.
    pub fn plain_scalar(value: impl Into<String>) -> Self {
        EventKind::Scalar {
            anchor: None,
            tag: None,
            value: value.into(),
            plain_implicit: true,
            quoted_implicit: true,
            style: None,
        }
    }

    /// The anchor defined by a node event, or referenced by an alias.
    pub fn anchor(&self) -> Option<&str> {
        match self {
            EventKind::Alias { anchor } => Some(anchor.as_str()),
            EventKind::Scalar { anchor, .. }
            | EventKind::SequenceStart { anchor, .. }
            | EventKind::MappingStart { anchor, .. } => anchor.as_deref(),
            _ => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            EventKind::Scalar { tag, .. }
            | EventKind::SequenceStart { tag, .. }
            | EventKind::MappingStart { tag, .. } => tag.as_deref(),
            _ => None,
        }
    }

    pub const fn opens_collection(&self) -> bool {
        matches!(
            self,
            EventKind::SequenceStart { .. } | EventKind::MappingStart { .. }
        )
    }

    pub const fn closes_collection(&self) -> bool {
        matches!(self, EventKind::SequenceEnd | EventKind::MappingEnd)
    }
}

impl Event {
    /// An event with both marks at the origin.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            start: Mark::default(),
            end: Mark::default(),
        }
    }

    pub fn with_span(kind: EventKind, start: Mark, end: Mark) -> Self {
        Self { kind, start, end }
    }

    pub const fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub const fn is_stream_end(&self) -> bool {
        matches!(self.kind, EventKind::StreamEnd)
    }
}

impl From<EventKind> for Event {
    fn from(kind: EventKind) -> Self {
        Event::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_record_shape() {
        let event = Event::with_span(
            EventKind::Scalar {
                anchor: Some("a1".into()),
                tag: None,
                value: "b".into(),
                plain_implicit: false,
                quoted_implicit: true,
                style: Some(ScalarStyle::DoubleQuoted),
            },
            Mark::new(3, 0, 3),
            Mark::new(6, 0, 6),
        );

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "scalar",
                "anchor": "a1",
                "tag": null,
                "value": "b",
                "plain_implicit": false,
                "quoted_implicit": true,
                "style": "double-quoted",
                "start": { "index": 3, "line": 0, "column": 3 },
                "end": { "index": 6, "line": 0, "column": 6 }
            })
        );

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_document_start_record_shape() {
        let event = Event::new(EventKind::DocumentStart {
            version: Some(Version::new(1, 1)),
            implicit: false,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "documentStart");
        assert_eq!(json["version"], json!({ "major": 1, "minor": 1 }));
        assert_eq!(json["implicit"], false);
    }

    #[test]
    fn test_unit_variants_carry_only_type_and_marks() {
        let json = serde_json::to_value(Event::new(EventKind::SequenceEnd)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(json["type"], "sequenceEnd");
    }

    #[test]
    fn test_minimal_records_fill_defaults() {
        let event: Event = serde_json::from_value(json!({ "type": "scalar", "value": "foo" })).unwrap();
        assert_eq!(event, Event::new(EventKind::plain_scalar("foo")));

        let event: Event = serde_json::from_value(json!({ "type": "documentStart" })).unwrap();
        assert_eq!(
            event.kind,
            EventKind::DocumentStart {
                version: None,
                implicit: false
            }
        );

        let event: Event = serde_json::from_value(json!({ "type": "mappingStart" })).unwrap();
        assert_eq!(
            event.kind,
            EventKind::MappingStart {
                anchor: None,
                tag: None,
                implicit: true,
                style: None
            }
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_value::<Event>(json!({ "type": "comment" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_alias_requires_anchor() {
        let result = serde_json::from_value::<Event>(json!({ "type": "alias" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_type_names_match_serialized_discriminator() {
        let kinds = [
            EventKind::StreamStart,
            EventKind::StreamEnd,
            EventKind::DocumentStart {
                version: None,
                implicit: true,
            },
            EventKind::DocumentEnd { implicit: true },
            EventKind::Alias {
                anchor: "x".into(),
            },
            EventKind::plain_scalar("v"),
            EventKind::SequenceStart {
                anchor: None,
                tag: None,
                implicit: true,
                style: Some(CollectionStyle::Flow),
            },
            EventKind::SequenceEnd,
            EventKind::MappingStart {
                anchor: None,
                tag: None,
                implicit: true,
                style: Some(CollectionStyle::Block),
            },
            EventKind::MappingEnd,
        ];

        for kind in kinds {
            let name = kind.type_name();
            let json = serde_json::to_value(Event::new(kind)).unwrap();
            assert_eq!(json["type"], name);
        }
    }

    #[test]
    fn test_anchor_and_tag_accessors() {
        let kind = EventKind::SequenceStart {
            anchor: Some("list".into()),
            tag: Some("tag:yaml.org,2002:seq".into()),
            implicit: false,
            style: None,
        };
        assert_eq!(kind.anchor(), Some("list"));
        assert_eq!(kind.tag(), Some("tag:yaml.org,2002:seq"));
        assert!(kind.opens_collection());
        assert!(!kind.closes_collection());

        let alias = EventKind::Alias {
            anchor: "list".into(),
        };
        assert_eq!(alias.anchor(), Some("list"));
        assert_eq!(alias.tag(), None);
    }
}
