//! Conversions between the event vocabulary and the libyaml engine.
//!
//! Every engine type stays inside this module. The engine's "any style"
//! sentinels appear only here: the parser never reports them and the
//! emitter substitutes them for a missing style.

use libyaml_safer as sys;
use yaml_stream_events::{CollectionStyle, Event, EventKind, Mark, ScalarStyle, Version};

use crate::error::{EmitError, ParseError, ParseErrorKind};

/// Translates engine marks for one source text.
///
/// The engine counts `index` in bytes and `column` in characters. Marks
/// leave this module with both in characters.
pub(crate) struct Positions {
    /// Byte offset of each character; empty for ASCII text, where the two
    /// units agree
    char_starts: Vec<usize>,

    /// Just past the last character
    end: Mark,
}

impl Positions {
    pub(crate) fn new(source: &str) -> Self {
        let char_starts = if source.is_ascii() {
            Vec::new()
        } else {
            source.char_indices().map(|(offset, _)| offset).collect()
        };

        Self {
            char_starts,
            end: end_mark(source),
        }
    }

    fn char_index(&self, byte_index: usize) -> usize {
        if self.char_starts.is_empty() {
            byte_index
        } else {
            self.char_starts.partition_point(|&start| start < byte_index)
        }
    }

    /// When the input does not end with a line break the engine adds one
    /// before stream end, so its final marks sit on a line that does not
    /// exist. Those are pulled back to the real end of input.
    pub(crate) fn mark(&self, mark: sys::Mark) -> Mark {
        if mark.line as usize > self.end.line {
            return self.end;
        }
        Mark::new(
            self.char_index(mark.index as usize),
            mark.line as usize,
            mark.column as usize,
        )
    }
}

/// Convert an engine event. Returns `None` for event kinds this crate does
/// not know about, which callers skip.
pub(crate) fn event_from_engine(event: sys::Event, positions: &Positions) -> Option<Event> {
    let sys::Event {
        data,
        start_mark,
        end_mark,
        ..
    } = event;

    let kind = match data {
        sys::EventData::StreamStart { .. } => EventKind::StreamStart,
        sys::EventData::StreamEnd => EventKind::StreamEnd,
        sys::EventData::DocumentStart {
            version_directive,
            implicit,
            ..
        } => EventKind::DocumentStart {
            version: version_directive
                .map(|directive| Version::new(directive.major as u32, directive.minor as u32)),
            implicit,
        },
        sys::EventData::DocumentEnd { implicit, .. } => EventKind::DocumentEnd { implicit },
        sys::EventData::Alias { anchor, .. } => EventKind::Alias { anchor },
        sys::EventData::Scalar {
            anchor,
            tag,
            value,
            plain_implicit,
            quoted_implicit,
            style,
            ..
        } => EventKind::Scalar {
            anchor,
            tag,
            value,
            plain_implicit,
            quoted_implicit,
            style: scalar_style_from_engine(style),
        },
        sys::EventData::SequenceStart {
            anchor,
            tag,
            implicit,
            style,
            ..
        } => EventKind::SequenceStart {
            anchor,
            tag,
            implicit,
            style: sequence_style_from_engine(style),
        },
        sys::EventData::SequenceEnd => EventKind::SequenceEnd,
        sys::EventData::MappingStart {
            anchor,
            tag,
            implicit,
            style,
            ..
        } => EventKind::MappingStart {
            anchor,
            tag,
            implicit,
            style: mapping_style_from_engine(style),
        },
        sys::EventData::MappingEnd => EventKind::MappingEnd,
        #[allow(unreachable_patterns)]
        _ => return None,
    };

    Some(Event::with_span(
        kind,
        positions.mark(start_mark),
        positions.mark(end_mark),
    ))
}

/// Convert an event for the emitter. Ownership of the result passes into
/// the engine's `emit` call.
pub(crate) fn event_to_engine(event: Event) -> Result<sys::Event, EmitError> {
    let event = match event.kind {
        EventKind::StreamStart => sys::Event::stream_start(sys::Encoding::Utf8),
        EventKind::StreamEnd => sys::Event::stream_end(),
        EventKind::DocumentStart { version, implicit } => {
            let directive = version.map(version_directive).transpose()?;
            sys::Event::document_start(directive, &[], implicit)
        }
        EventKind::DocumentEnd { implicit } => sys::Event::document_end(implicit),
        EventKind::Alias { anchor } => sys::Event::alias(&anchor),
        EventKind::Scalar {
            anchor,
            tag,
            value,
            plain_implicit,
            quoted_implicit,
            style,
        } => sys::Event::scalar(
            anchor.as_deref(),
            tag.as_deref(),
            &value,
            plain_implicit,
            quoted_implicit,
            scalar_style_to_engine(style),
        ),
        EventKind::SequenceStart {
            anchor,
            tag,
            implicit,
            style,
        } => sys::Event::sequence_start(
            anchor.as_deref(),
            tag.as_deref(),
            implicit,
            sequence_style_to_engine(style),
        ),
        EventKind::SequenceEnd => sys::Event::sequence_end(),
        EventKind::MappingStart {
            anchor,
            tag,
            implicit,
            style,
        } => sys::Event::mapping_start(
            anchor.as_deref(),
            tag.as_deref(),
            implicit,
            mapping_style_to_engine(style),
        ),
        EventKind::MappingEnd => sys::Event::mapping_end(),
    };
    Ok(event)
}

/// The engine only hands out version directives it has scanned itself, so
/// obtain one by scanning a directive line. Versions the engine does not
/// support fail here rather than in the emitter.
fn version_directive(version: Version) -> Result<sys::VersionDirective, EmitError> {
    let unsupported = || {
        EmitError::new(format!(
            "incompatible %YAML directive {}.{}",
            version.major, version.minor
        ))
    };

    let source = format!("%YAML {}.{}\n---\n", version.major, version.minor);
    let mut input = source.as_bytes();
    let mut parser = sys::Parser::new();
    parser.set_input(&mut input);

    loop {
        let event = parser.parse().map_err(|_| unsupported())?;
        match event.data {
            sys::EventData::DocumentStart {
                version_directive: Some(directive),
                ..
            } => return Ok(directive),
            sys::EventData::DocumentStart { .. } | sys::EventData::StreamEnd => {
                return Err(unsupported());
            }
            _ => {}
        }
    }
}

fn scalar_style_from_engine(style: sys::ScalarStyle) -> Option<ScalarStyle> {
    match style {
        sys::ScalarStyle::Plain => Some(ScalarStyle::Plain),
        sys::ScalarStyle::SingleQuoted => Some(ScalarStyle::SingleQuoted),
        sys::ScalarStyle::DoubleQuoted => Some(ScalarStyle::DoubleQuoted),
        sys::ScalarStyle::Literal => Some(ScalarStyle::Literal),
        sys::ScalarStyle::Folded => Some(ScalarStyle::Folded),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

fn scalar_style_to_engine(style: Option<ScalarStyle>) -> sys::ScalarStyle {
    match style {
        None => sys::ScalarStyle::Any,
        Some(ScalarStyle::Plain) => sys::ScalarStyle::Plain,
        Some(ScalarStyle::SingleQuoted) => sys::ScalarStyle::SingleQuoted,
        Some(ScalarStyle::DoubleQuoted) => sys::ScalarStyle::DoubleQuoted,
        Some(ScalarStyle::Literal) => sys::ScalarStyle::Literal,
        Some(ScalarStyle::Folded) => sys::ScalarStyle::Folded,
    }
}

fn sequence_style_from_engine(style: sys::SequenceStyle) -> Option<CollectionStyle> {
    match style {
        sys::SequenceStyle::Block => Some(CollectionStyle::Block),
        sys::SequenceStyle::Flow => Some(CollectionStyle::Flow),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

fn sequence_style_to_engine(style: Option<CollectionStyle>) -> sys::SequenceStyle {
    match style {
        None => sys::SequenceStyle::Any,
        Some(CollectionStyle::Block) => sys::SequenceStyle::Block,
        Some(CollectionStyle::Flow) => sys::SequenceStyle::Flow,
    }
}

fn mapping_style_from_engine(style: sys::MappingStyle) -> Option<CollectionStyle> {
    match style {
        sys::MappingStyle::Block => Some(CollectionStyle::Block),
        sys::MappingStyle::Flow => Some(CollectionStyle::Flow),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

fn mapping_style_to_engine(style: Option<CollectionStyle>) -> sys::MappingStyle {
    match style {
        None => sys::MappingStyle::Any,
        Some(CollectionStyle::Block) => sys::MappingStyle::Block,
        Some(CollectionStyle::Flow) => sys::MappingStyle::Flow,
    }
}

/// Translate an engine failure while reading `source`, the input without
/// its byte-order mark.
///
/// The engine does not expose where a reader error happened, but for text
/// input the only reader failure is a character outside the YAML printable
/// set, so locate the first one directly.
pub(crate) fn parse_error(err: &sys::Error, source: &str, positions: &Positions) -> ParseError {
    let problem = err.problem().to_owned();

    let kind = match err.kind() {
        sys::ErrorKind::Reader => {
            let (offset, value) = first_unprintable(source)
                .map_or((source.len(), 0), |(offset, ch)| (offset, u32::from(ch)));
            return ParseError::reader(problem, offset, value);
        }
        sys::ErrorKind::Scanner => ParseErrorKind::Scanner,
        _ => ParseErrorKind::Parser,
    };

    let problem_mark = err
        .problem_mark()
        .map(|mark| positions.mark(mark))
        .unwrap_or_default();
    let context = err.context().map(|context| {
        let mark = err
            .context_mark()
            .map(|mark| positions.mark(mark))
            .unwrap_or_default();
        (context.to_owned(), mark)
    });

    ParseError::syntax(kind, problem, problem_mark, context)
}

pub(crate) fn emit_error(err: &sys::Error) -> EmitError {
    match err.kind() {
        sys::ErrorKind::Emitter => EmitError::new(err.problem()),
        _ => EmitError::new(err.to_string()),
    }
}

/// The position just past the last character of `source`.
fn end_mark(source: &str) -> Mark {
    let mut mark = Mark::default();
    let mut chars = source.chars().peekable();
    while let Some(ch) = chars.next() {
        mark.index += 1;
        match ch {
            // CR LF is one break
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' | '\u{85}' | '\u{2028}' | '\u{2029}' => {
                mark.line += 1;
                mark.column = 0;
            }
            _ => mark.column += 1,
        }
    }
    mark
}

fn first_unprintable(input: &str) -> Option<(usize, char)> {
    input.char_indices().find(|&(_, ch)| !is_printable(ch))
}

/// The YAML 1.1 printable character set, as enforced by the engine's reader.
fn is_printable(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{7E}'
            | '\u{85}'
            | '\u{A0}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}
