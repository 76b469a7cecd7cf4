//! Incremental YAML emitter driven by events.

use std::io;

use libyaml_safer as sys;
use yaml_stream_events::{Event, EventKind};

use crate::bridge;
use crate::config::EmitterConfig;
use crate::error::EmitError;

/// Serializes a stream of [`Event`]s into YAML text.
///
/// Output goes to the writer given at construction, usually a
/// [`ChunkSink`](crate::ChunkSink). The engine buffers internally, so
/// output arrives in chunks that need not line up with events or
/// documents; everything has been written once `StreamEnd` is emitted.
///
/// The caller is responsible for a well-formed sequence: `StreamStart`
/// first, `StreamEnd` last, balanced start/end pairs, and content wrapped
/// in `DocumentStart`/`DocumentEnd`. Violations are reported by the engine
/// as an [`EmitError`] from the offending [`emit`](Emitter::emit) call.
///
/// # Example
///
/// ```rust
/// use yaml_stream::{ChunkSink, Emitter};
///
/// let mut output = String::new();
/// {
///     let mut sink = ChunkSink::new(|chunk: &str| {
///         output.push_str(chunk);
///         Ok(())
///     });
///     let mut emitter = Emitter::new(&mut sink);
///     emitter.stream_start().unwrap();
///     emitter.document_start().unwrap();
///     emitter.scalar("foo").unwrap();
///     emitter.document_end().unwrap();
///     emitter.stream_end().unwrap();
/// }
/// assert_eq!(output, "--- foo\n...\n");
/// ```
pub struct Emitter<'w> {
    engine: sys::Emitter<'w>,
    emitted: usize,
}

impl<'w> Emitter<'w> {
    pub fn new<W: io::Write>(output: &'w mut W) -> Self {
        Self::with_config(output, &EmitterConfig::default())
    }

    pub fn with_config<W: io::Write>(output: &'w mut W, config: &EmitterConfig) -> Self {
        let mut engine = sys::Emitter::new();
        engine.set_output(output);
        config.apply(&mut engine);

        Self { engine, emitted: 0 }
    }

    /// Feed one event to the engine.
    ///
    /// # Errors
    ///
    /// Returns an [`EmitError`] when the engine rejects the event (for
    /// example a `SequenceEnd` with no open sequence) or when writing the
    /// output fails. The event is not retried.
    pub fn emit(&mut self, event: Event) -> Result<(), EmitError> {
        let type_name = event.type_name();
        let finished = event.is_stream_end();
        let raw = bridge::event_to_engine(event)?;

        if let Err(err) = self.engine.emit(raw) {
            let err = bridge::emit_error(&err);
            tracing::debug!(event = type_name, error = %err, "emitter rejected event");
            return Err(err);
        }

        self.emitted += 1;
        tracing::trace!(event = type_name, "emitted event");
        if finished {
            tracing::debug!(events = self.emitted, "emit finished");
        }
        Ok(())
    }

    /// Write out whatever the engine has buffered.
    pub fn flush(&mut self) -> Result<(), EmitError> {
        self.engine.flush().map_err(|err| bridge::emit_error(&err))
    }

    /// Number of events accepted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn stream_start(&mut self) -> Result<(), EmitError> {
        self.emit(Event::new(EventKind::StreamStart))
    }

    pub fn stream_end(&mut self) -> Result<(), EmitError> {
        self.emit(Event::new(EventKind::StreamEnd))
    }

    /// Start an explicit (`---`) document without a version directive.
    pub fn document_start(&mut self) -> Result<(), EmitError> {
        self.emit(Event::new(EventKind::DocumentStart {
            version: None,
            implicit: false,
        }))
    }

    /// End a document with an explicit `...` marker.
    pub fn document_end(&mut self) -> Result<(), EmitError> {
        self.emit(Event::new(EventKind::DocumentEnd { implicit: false }))
    }

    /// An untagged scalar in whatever style the engine picks.
    pub fn scalar(&mut self, value: impl Into<String>) -> Result<(), EmitError> {
        self.emit(Event::new(EventKind::plain_scalar(value)))
    }

    pub fn alias(&mut self, anchor: impl Into<String>) -> Result<(), EmitError> {
        self.emit(Event::new(EventKind::Alias {
            anchor: anchor.into(),
        }))
    }

    pub fn sequence_start(&mut self) -> Result<(), EmitError> {
        self.emit(Event::new(EventKind::SequenceStart {
            anchor: None,
            tag: None,
            implicit: true,
            style: None,
        }))
    }

    pub fn sequence_end(&mut self) -> Result<(), EmitError> {
        self.emit(Event::new(EventKind::SequenceEnd))
    }

    pub fn mapping_start(&mut self) -> Result<(), EmitError> {
        self.emit(Event::new(EventKind::MappingStart {
            anchor: None,
            tag: None,
            implicit: true,
            style: None,
        }))
    }

    pub fn mapping_end(&mut self) -> Result<(), EmitError> {
        self.emit(Event::new(EventKind::MappingEnd))
    }
}
