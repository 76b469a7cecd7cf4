//! Positions in a YAML character stream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in a YAML stream (all fields 0-indexed).
///
/// `index` counts characters, not bytes, from the start of the stream. A
/// leading byte-order mark is never counted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Mark {
    /// Character offset from start of stream
    pub index: usize,
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters)
    pub column: usize,
}

impl Mark {
    pub const fn new(index: usize, line: usize, column: usize) -> Self {
        Self {
            index,
            line,
            column,
        }
    }
}

impl fmt::Display for Mark {
    /// Renders the 1-based form used in messages, e.g. `line 2 column 5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_ordering() {
        let mark1 = Mark::new(0, 0, 0);
        let mark2 = Mark::new(5, 0, 5);
        let mark3 = Mark::new(10, 1, 0);

        assert!(mark1 < mark2);
        assert!(mark2 < mark3);
        assert!(mark1 < mark3);
    }

    #[test]
    fn test_mark_default_is_origin() {
        assert_eq!(Mark::default(), Mark::new(0, 0, 0));
    }

    #[test]
    fn test_mark_display_is_one_based() {
        assert_eq!(Mark::new(12, 1, 4).to_string(), "line 2 column 5");
    }

    #[test]
    fn test_serialization_mark() {
        let mark = Mark::new(100, 5, 10);
        let json = serde_json::to_value(mark).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "index": 100, "line": 5, "column": 10 })
        );

        let deserialized: Mark = serde_json::from_value(json).unwrap();
        assert_eq!(mark, deserialized);
    }
}
