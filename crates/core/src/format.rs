//! Tabular and JSON rendering of [`Value`] trees.
//!
//! The tabular mode is the default: an indentation-based block where every
//! mapping key is humanized, flat sequences render inline comma-joined,
//! and absent values disappear instead of printing a placeholder. The JSON
//! mode is a trivial escape hatch for callers that want the raw payload.

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::error::FormatError;
use crate::humanize::{humanize, humanize_title};
use crate::value::Value;

/// Rendered form of an explicit null.
const NULL_TEXT: &str = "null";
/// Sentinel for an empty (or fully omitted) sequence.
const NONE_TEXT: &str = "none";
/// Sentinel for an empty (or fully omitted) mapping, and for an input
/// with nothing to render at all.
const NO_PROPERTIES: &str = "no properties";

/// Output mode for [`TextFormatter::format_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Indentation-based text with humanized keys (the default).
    #[default]
    Tabular,
    /// Compact JSON, untouched apart from the optional title wrapper.
    Json,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tabular => write!(f, "tabular"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tabular" => Ok(Self::Tabular),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output mode: {s}")),
        }
    }
}

/// Renders [`Value`] trees as text for language-model consumption.
///
/// The formatter is stateless apart from its depth limit; it can be shared
/// freely across threads.
///
/// ## Examples
///
/// ```
/// use toolfmt_core::{TextFormatter, Value};
///
/// let formatter = TextFormatter::new();
/// let product = Value::mapping([
///     ("productName", Value::from("Widget")),
///     ("inStock", Value::from(true)),
/// ]);
///
/// let text = formatter.format_titled(&product, "product")?;
/// assert_eq!(text, "PRODUCT\nProduct Name: Widget\nIn Stock: Yes");
/// # Ok::<(), toolfmt_core::FormatError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatter {
    max_depth: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter {
    /// Default traversal depth limit. Real tool payloads nest a handful of
    /// levels; anything approaching this limit is malformed or adversarial.
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Create a formatter with the default depth limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Create a formatter with a custom depth limit.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Render `data` in tabular mode without a title.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::DepthExceeded`] if `data` nests deeper than
    /// the configured limit.
    pub fn format(&self, data: &Value) -> Result<String, FormatError> {
        self.format_with(data, None, OutputMode::Tabular)
    }

    /// Render `data` in tabular mode under a humanized, uppercased title.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::DepthExceeded`] if `data` nests deeper than
    /// the configured limit.
    pub fn format_titled(&self, data: &Value, title: &str) -> Result<String, FormatError> {
        self.format_with(data, Some(title), OutputMode::Tabular)
    }

    /// Render `data` with an optional title in the requested mode.
    ///
    /// An input with nothing to render (absent or unrenderable at the top
    /// level) produces the literal `no properties` in either mode, below
    /// the title line when one was given.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::DepthExceeded`] if `data` nests deeper than
    /// the configured limit in tabular mode. The JSON mode is a plain
    /// conversion and does not trip the guard.
    #[instrument(skip(self, data), fields(mode = %mode))]
    pub fn format_with(
        &self,
        data: &Value,
        title: Option<&str>,
        mode: OutputMode,
    ) -> Result<String, FormatError> {
        let header = title.map(humanize_title);

        if data.is_omitted() {
            return Ok(Self::with_header(header, NO_PROPERTIES.to_owned()));
        }

        match mode {
            OutputMode::Json => Ok(Self::json_text(data, header)),
            OutputMode::Tabular => {
                trace!(max_depth = self.max_depth, "rendering tabular body");
                // Start one level below base so the first nesting level of
                // the body carries no leading tabs.
                let body = self
                    .render(data, -1, 0)?
                    .unwrap_or_else(|| NO_PROPERTIES.to_owned());
                Ok(Self::with_header(header, body))
            }
        }
    }

    fn with_header(header: Option<String>, body: String) -> String {
        match header {
            Some(header) => format!("{header}\n{body}"),
            None => body,
        }
    }

    /// Compact JSON of the value, wrapped as `{"<TITLE>": value}` when a
    /// title was given.
    fn json_text(data: &Value, header: Option<String>) -> String {
        let json = data.to_json().unwrap_or(serde_json::Value::Null);
        match header {
            Some(header) => {
                let mut wrapper = serde_json::Map::with_capacity(1);
                wrapper.insert(header, json);
                serde_json::Value::Object(wrapper).to_string()
            }
            None => json.to_string(),
        }
    }

    /// Render one value, or `None` when it is omitted from output.
    ///
    /// `indent` is signed because the top-level call starts one level below
    /// base; tab repetition clamps at zero.
    fn render(&self, value: &Value, indent: i32, depth: usize) -> Result<Option<String>, FormatError> {
        if depth > self.max_depth {
            return Err(FormatError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        Ok(match value {
            Value::Absent | Value::Unrenderable => None,
            Value::Null => Some(NULL_TEXT.to_owned()),
            Value::Bool(true) => Some("Yes".to_owned()),
            Value::Bool(false) => Some("No".to_owned()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if s.is_empty() => Some("\"\"".to_owned()),
            Value::String(s) => Some(s.clone()),
            Value::Sequence(items) => Some(self.render_sequence(items, indent, depth)?),
            Value::Mapping(entries) => Some(self.render_mapping(entries, indent, depth)?),
        })
    }

    fn render_sequence(
        &self,
        items: &[Value],
        indent: i32,
        depth: usize,
    ) -> Result<String, FormatError> {
        if items.is_empty() {
            return Ok(NONE_TEXT.to_owned());
        }

        if is_flat(items) {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                if let Some(text) = self.render(item, indent, depth + 1)? {
                    parts.push(text);
                }
            }
            return Ok(if parts.is_empty() {
                NONE_TEXT.to_owned()
            } else {
                parts.join(", ")
            });
        }

        // Indices are rendered as plain decimal labels, never humanized.
        // The sequence itself adds no indent level; the line formatter
        // already bumped `indent` when this sequence was attached to a key.
        let mut lines = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let line = self.line(&index.to_string(), item, indent, depth + 1)?;
            if !line.is_empty() {
                lines.push(line);
            }
        }
        Ok(if lines.is_empty() {
            NONE_TEXT.to_owned()
        } else {
            lines.join("\n")
        })
    }

    fn render_mapping(
        &self,
        entries: &[(String, Value)],
        indent: i32,
        depth: usize,
    ) -> Result<String, FormatError> {
        let mut lines = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let line = self.line(&humanize(key), value, indent + 1, depth + 1)?;
            if !line.is_empty() {
                lines.push(line);
            }
        }
        Ok(if lines.is_empty() {
            NO_PROPERTIES.to_owned()
        } else {
            lines.join("\n")
        })
    }

    /// Format one `label: value` line, or `""` when the value is omitted.
    ///
    /// Scalars, sentinel renderings, and flat sequences stay inline on the
    /// label's line; nested blocks go below it.
    fn line(
        &self,
        label: &str,
        value: &Value,
        indent: i32,
        depth: usize,
    ) -> Result<String, FormatError> {
        // A sequence attached to a key renders its index lines one level
        // deeper so they align under the label.
        let child_indent = if matches!(value, Value::Sequence(_)) {
            indent + 1
        } else {
            indent
        };
        let Some(rendered) = self.render(value, child_indent, depth)? else {
            return Ok(String::new());
        };

        let mut out = tabs(indent);
        out.push_str(label);
        out.push(':');
        if renders_inline(value, &rendered) {
            out.push(' ');
            out.push_str(&rendered);
        } else {
            out.push('\n');
            out.push_str(&rendered);
        }
        Ok(out)
    }
}

/// Whether a sequence has no container elements and therefore renders
/// inline, comma-joined.
fn is_flat(items: &[Value]) -> bool {
    !items.iter().any(Value::is_container)
}

/// Whether a rendered value belongs on the same line as its label.
fn renders_inline(value: &Value, rendered: &str) -> bool {
    if !value.is_container() {
        return true;
    }
    if matches!(rendered, NULL_TEXT | NONE_TEXT | NO_PROPERTIES) {
        return true;
    }
    matches!(value, Value::Sequence(items) if is_flat(items))
}

fn tabs(indent: i32) -> String {
    "\t".repeat(usize::try_from(indent).unwrap_or(0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fmt() -> TextFormatter {
        TextFormatter::new()
    }

    // -------------------------------------------------------------------------
    // Scalars
    // -------------------------------------------------------------------------

    #[test]
    fn test_number_with_title() {
        assert_eq!(
            fmt().format_titled(&Value::from(42_i64), "Count").unwrap(),
            "COUNT\n42"
        );
    }

    #[test]
    fn test_empty_string_stays_visible() {
        assert_eq!(
            fmt().format_titled(&Value::from(""), "Label").unwrap(),
            "LABEL\n\"\""
        );
    }

    #[test]
    fn test_booleans_render_as_words() {
        assert_eq!(fmt().format(&Value::from(true)).unwrap(), "Yes");
        assert_eq!(fmt().format(&Value::from(false)).unwrap(), "No");
    }

    #[test]
    fn test_null_renders_literally() {
        assert_eq!(fmt().format(&Value::Null).unwrap(), "null");
    }

    #[test]
    fn test_float_renders_in_decimal_form() {
        assert_eq!(fmt().format(&Value::from(19.99_f64)).unwrap(), "19.99");
    }

    // -------------------------------------------------------------------------
    // Omitted input
    // -------------------------------------------------------------------------

    #[test]
    fn test_absent_input() {
        assert_eq!(fmt().format(&Value::Absent).unwrap(), "no properties");
    }

    #[test]
    fn test_absent_input_with_title() {
        assert_eq!(
            fmt().format_titled(&Value::Absent, "My Title").unwrap(),
            "MY TITLE\nno properties"
        );
    }

    #[test]
    fn test_unrenderable_input_in_json_mode() {
        assert_eq!(
            fmt()
                .format_with(&Value::Unrenderable, None, OutputMode::Json)
                .unwrap(),
            "no properties"
        );
    }

    // -------------------------------------------------------------------------
    // Containers
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_mapping() {
        let empty = Value::mapping::<String, _>([]);
        assert_eq!(fmt().format(&empty).unwrap(), "no properties");
    }

    #[test]
    fn test_empty_sequence_at_top_level() {
        // Only mappings use "no properties"; a bare sequence says "none".
        assert_eq!(fmt().format(&Value::sequence([])).unwrap(), "none");
    }

    #[test]
    fn test_flat_sequence_renders_inline() {
        let value = Value::mapping([(
            "tags",
            Value::sequence([Value::from("a"), Value::from("b")]),
        )]);
        assert_eq!(fmt().format(&value).unwrap(), "Tags: a, b");
    }

    #[test]
    fn test_flat_sequence_drops_omitted_elements() {
        let value = Value::sequence([Value::from("a"), Value::Absent, Value::from("b")]);
        assert_eq!(fmt().format(&value).unwrap(), "a, b");
    }

    #[test]
    fn test_sequence_of_only_omitted_elements() {
        let value = Value::sequence([Value::Absent, Value::Unrenderable]);
        assert_eq!(fmt().format(&value).unwrap(), "none");
    }

    #[test]
    fn test_sequence_mixing_null_and_scalars_is_flat() {
        let value = Value::sequence([Value::from("a"), Value::Null, Value::from(3_i64)]);
        assert_eq!(fmt().format(&value).unwrap(), "a, null, 3");
    }

    #[test]
    fn test_mapping_drops_omitted_entries() {
        let value = Value::mapping([
            ("name", Value::from("Widget")),
            ("callback", Value::Unrenderable),
            ("note", Value::Absent),
        ]);
        assert_eq!(fmt().format(&value).unwrap(), "Name: Widget");
    }

    #[test]
    fn test_mapping_of_only_omitted_entries() {
        let value = Value::mapping([("a", Value::Absent), ("b", Value::Unrenderable)]);
        assert_eq!(fmt().format(&value).unwrap(), "no properties");
    }

    #[test]
    fn test_empty_containers_render_inline_under_keys() {
        let value = Value::mapping([
            ("tags", Value::sequence([])),
            ("meta", Value::mapping::<String, _>([])),
            ("gone", Value::Null),
        ]);
        assert_eq!(
            fmt().format(&value).unwrap(),
            "Tags: none\nMeta: no properties\nGone: null"
        );
    }

    #[test]
    fn test_nested_mapping_indents_one_level() {
        let value = Value::mapping([(
            "dimensions",
            Value::mapping([
                ("width", Value::from(10_i64)),
                ("height", Value::from(20_i64)),
            ]),
        )]);
        assert_eq!(
            fmt().format(&value).unwrap(),
            "Dimensions:\n\tWidth: 10\n\tHeight: 20"
        );
    }

    #[test]
    fn test_nested_sequence_of_mappings() {
        let value = Value::mapping([(
            "variants",
            Value::sequence([
                Value::mapping([("sku", Value::from("X1"))]),
                Value::mapping([("sku", Value::from("X2"))]),
            ]),
        )]);
        assert_eq!(
            fmt().format(&value).unwrap(),
            "Variants:\n\t0:\n\t\tSku: X1\n\t1:\n\t\tSku: X2"
        );
    }

    #[test]
    fn test_non_flat_sequence_skips_omitted_and_keeps_indices() {
        // Indices name original positions; survivors keep theirs.
        let value = Value::mapping([(
            "rows",
            Value::sequence([
                Value::Absent,
                Value::mapping([("id", Value::from(7_i64))]),
            ]),
        )]);
        assert_eq!(fmt().format(&value).unwrap(), "Rows:\n\t1:\n\t\tId: 7");
    }

    #[test]
    fn test_keys_are_humanized_but_string_values_are_not() {
        let value = Value::mapping([("customerEmail", Value::from("someName@example.com"))]);
        assert_eq!(
            fmt().format(&value).unwrap(),
            "Customer Email: someName@example.com"
        );
    }

    // -------------------------------------------------------------------------
    // JSON mode
    // -------------------------------------------------------------------------

    #[test]
    fn test_json_mode_matches_serde_json() {
        let json = json!({"name": "Widget", "tags": ["a", "b"], "price": 19.99});
        let value = Value::from(json.clone());
        assert_eq!(
            fmt().format_with(&value, None, OutputMode::Json).unwrap(),
            json.to_string()
        );
    }

    #[test]
    fn test_json_mode_wraps_title() {
        let value = Value::from(json!({"id": 1}));
        assert_eq!(
            fmt()
                .format_with(&value, Some("product"), OutputMode::Json)
                .unwrap(),
            r#"{"PRODUCT":{"id":1}}"#
        );
    }

    #[test]
    fn test_json_mode_applies_no_key_humanization() {
        let value = Value::from(json!({"productName": "Widget"}));
        assert_eq!(
            fmt().format_with(&value, None, OutputMode::Json).unwrap(),
            r#"{"productName":"Widget"}"#
        );
    }

    // -------------------------------------------------------------------------
    // Depth guard
    // -------------------------------------------------------------------------

    fn nested_mappings(levels: usize) -> Value {
        let mut value = Value::from("leaf");
        for _ in 0..levels {
            value = Value::mapping([("child", value)]);
        }
        value
    }

    #[test]
    fn test_depth_guard_trips_past_the_limit() {
        let formatter = TextFormatter::with_max_depth(3);
        assert_eq!(
            formatter.format(&nested_mappings(10)),
            Err(FormatError::DepthExceeded { limit: 3 })
        );
    }

    #[test]
    fn test_depth_guard_allows_nesting_up_to_the_limit() {
        let formatter = TextFormatter::with_max_depth(3);
        assert!(formatter.format(&nested_mappings(3)).is_ok());
    }

    #[test]
    fn test_default_limit_handles_deep_but_sane_payloads() {
        assert!(fmt().format(&nested_mappings(100)).is_ok());
    }

    // -------------------------------------------------------------------------
    // Output mode plumbing
    // -------------------------------------------------------------------------

    #[test]
    fn test_output_mode_round_trip() {
        for mode in [OutputMode::Tabular, OutputMode::Json] {
            let parsed: OutputMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert!("yaml".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_output_mode_serde() {
        assert_eq!(serde_json::to_string(&OutputMode::Json).unwrap(), r#""json""#);
        let parsed: OutputMode = serde_json::from_str(r#""tabular""#).unwrap();
        assert_eq!(parsed, OutputMode::Tabular);
    }

    #[test]
    fn test_default_mode_is_tabular() {
        assert_eq!(OutputMode::default(), OutputMode::Tabular);
    }
}
