//! Emitter configuration.

use libyaml_safer as sys;
use serde::{Deserialize, Serialize};

/// Output formatting options for [`Emitter`](crate::Emitter).
///
/// Unset values keep the engine defaults (2-space indent, 80-column
/// preferred width).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Write the canonical form: explicit tags, flow collections, and
    /// double-quoted scalars everywhere.
    pub canonical: bool,

    /// Indentation step for block collections.
    pub indent: Option<i32>,

    /// Preferred line width; `-1` means unlimited.
    pub width: Option<i32>,

    /// Write non-ASCII printable characters verbatim instead of escaping them.
    pub unicode: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            canonical: false,
            indent: None,
            width: None,
            unicode: true,
        }
    }
}

impl EmitterConfig {
    pub fn canonical(mut self, canonical: bool) -> Self {
        self.canonical = canonical;
        self
    }

    pub fn indent(mut self, indent: i32) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    pub(crate) fn apply(&self, engine: &mut sys::Emitter<'_>) {
        engine.set_canonical(self.canonical);
        engine.set_unicode(self.unicode);
        if let Some(indent) = self.indent {
            engine.set_indent(indent);
        }
        if let Some(width) = self.width {
            engine.set_width(width);
        }
    }
}
