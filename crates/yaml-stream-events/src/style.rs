//! Presentation styles for scalars and collections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a scalar is written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarStyle {
    /// `foo`
    Plain,
    /// `'foo'`
    SingleQuoted,
    /// `"foo"`
    DoubleQuoted,
    /// `|` block scalar
    Literal,
    /// `>` block scalar
    Folded,
}

impl ScalarStyle {
    /// The name used in the serialized event record.
    pub const fn as_str(self) -> &'static str {
        match self {
            ScalarStyle::Plain => "plain",
            ScalarStyle::SingleQuoted => "single-quoted",
            ScalarStyle::DoubleQuoted => "double-quoted",
            ScalarStyle::Literal => "literal",
            ScalarStyle::Folded => "folded",
        }
    }

    /// Whether the scalar is written with quotes.
    pub const fn is_quoted(self) -> bool {
        matches!(self, ScalarStyle::SingleQuoted | ScalarStyle::DoubleQuoted)
    }
}

impl fmt::Display for ScalarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a sequence or mapping is written indented on separate lines
/// (block) or inline with brackets/braces (flow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStyle {
    Block,
    Flow,
}

impl CollectionStyle {
    /// The name used in the serialized event record.
    pub const fn as_str(self) -> &'static str {
        match self {
            CollectionStyle::Block => "block",
            CollectionStyle::Flow => "flow",
        }
    }
}

impl fmt::Display for CollectionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names_match_as_str() {
        for style in [
            ScalarStyle::Plain,
            ScalarStyle::SingleQuoted,
            ScalarStyle::DoubleQuoted,
            ScalarStyle::Literal,
            ScalarStyle::Folded,
        ] {
            let json = serde_json::to_value(style).unwrap();
            assert_eq!(json, serde_json::Value::from(style.as_str()));
        }

        for style in [CollectionStyle::Block, CollectionStyle::Flow] {
            let json = serde_json::to_value(style).unwrap();
            assert_eq!(json, serde_json::Value::from(style.as_str()));
        }
    }

    #[test]
    fn test_deserialize_kebab_case() {
        let style: ScalarStyle = serde_json::from_str("\"double-quoted\"").unwrap();
        assert_eq!(style, ScalarStyle::DoubleQuoted);
        assert!(style.is_quoted());

        let style: CollectionStyle = serde_json::from_str("\"flow\"").unwrap();
        assert_eq!(style, CollectionStyle::Flow);
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(serde_json::from_str::<ScalarStyle>("\"any\"").is_err());
    }
}
