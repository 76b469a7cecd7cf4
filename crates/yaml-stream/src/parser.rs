//! Streaming YAML parser that delivers events to a callback.

use std::convert::Infallible;

use libyaml_safer as sys;
use yaml_stream_events::Event;

use crate::bridge;
use crate::error::{BoxError, Error, ParseError, Result};

const BOM: char = '\u{FEFF}';

/// Why [`drive`] stopped before the end of the stream.
pub(crate) enum Stop<E> {
    Parse(ParseError),
    Handler(E),
}

/// Parse `input`, calling `on_event` once per event in document order.
///
/// Each event is handed over before the next one is read, so the whole
/// document is never buffered. Parsing ends after `StreamEnd` has been
/// delivered. Empty input is a valid stream of just `StreamStart` and
/// `StreamEnd`. A leading byte-order mark is ignored and does not shift any
/// [`Mark`](crate::Mark).
///
/// # Example
///
/// ```rust
/// use yaml_stream::{parse, EventKind};
///
/// let mut types = Vec::new();
/// parse("foo", |event| {
///     types.push(event.type_name());
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(
///     types,
///     ["streamStart", "documentStart", "scalar", "documentEnd", "streamEnd"]
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] on malformed input. Events delivered before
/// the failure are not taken back. If `on_event` returns an error, parsing
/// stops immediately and [`Error::Handler`] carries that error.
pub fn parse<F>(input: &str, mut on_event: F) -> Result<()>
where
    F: FnMut(Event) -> std::result::Result<(), BoxError>,
{
    drive(input, &mut on_event).map_err(|stop| match stop {
        Stop::Parse(err) => Error::Parse(err),
        Stop::Handler(err) => Error::Handler(err),
    })
}

/// Parse `input` and collect every event.
///
/// # Errors
///
/// Returns the [`ParseError`] for malformed input.
pub fn parse_events(input: &str) -> std::result::Result<Vec<Event>, ParseError> {
    let mut events = Vec::new();
    let collected = drive(input, |event| {
        events.push(event);
        Ok::<(), Infallible>(())
    });

    match collected {
        Ok(()) => Ok(events),
        Err(Stop::Parse(err)) => Err(err),
        Err(Stop::Handler(never)) => match never {},
    }
}

/// The event loop shared by [`parse`], [`parse_events`] and the tree loader.
pub(crate) fn drive<F, E>(input: &str, mut on_event: F) -> std::result::Result<(), Stop<E>>
where
    F: FnMut(Event) -> std::result::Result<(), E>,
{
    let source = input.strip_prefix(BOM).unwrap_or(input);
    let mut bytes = source.as_bytes();

    let mut parser = sys::Parser::new();
    parser.set_encoding(sys::Encoding::Utf8);
    parser.set_input(&mut bytes);
    let positions = bridge::Positions::new(source);

    tracing::debug!(len = source.len(), bom = source.len() != input.len(), "parse started");

    let mut delivered = 0usize;
    loop {
        let raw = parser.parse().map_err(|err| {
            let err = bridge::parse_error(&err, source, &positions);
            tracing::debug!(events = delivered, error = %err, "parse failed");
            Stop::Parse(err)
        })?;

        let Some(event) = bridge::event_from_engine(raw, &positions) else {
            continue;
        };

        let finished = event.is_stream_end();
        tracing::trace!(
            event = event.type_name(),
            line = event.start.line,
            column = event.start.column,
            "parsed event"
        );

        if let Err(err) = on_event(event) {
            tracing::debug!(events = delivered, "event handler stopped parsing");
            return Err(Stop::Handler(err));
        }
        delivered += 1;

        if finished {
            break;
        }
    }

    tracing::debug!(events = delivered, "parse finished");
    Ok(())
}
