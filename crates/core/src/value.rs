//! The value union accepted by the formatter.
//!
//! Tool results arrive as arbitrary JSON-like trees. [`Value`] closes that
//! grammar into a tagged union so the renderer can dispatch by pattern
//! matching instead of ad hoc type checks, and so "ignorable" leaves
//! (absent fields, values with no text form) are explicit variants rather
//! than silent special cases.

use serde_json::Number;

/// A scalar, sequence, or keyed mapping.
///
/// Mappings keep their entries in insertion order; that order drives the
/// order of rendered lines. Keys are expected to be unique, but nothing
/// enforces it - duplicate keys simply render twice.
///
/// ## Examples
///
/// ```
/// use toolfmt_core::Value;
///
/// let value = Value::mapping([
///     ("title", Value::from("Widget")),
///     ("tags", Value::sequence([Value::from("a"), Value::from("b")])),
/// ]);
/// assert!(!value.is_omitted());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A field that was never set. Dropped from rendered output.
    Absent,
    /// A value with no textual form (a callback, an opaque handle).
    /// Dropped from rendered output, like [`Value::Absent`].
    Unrenderable,
    /// An explicit null.
    Null,
    /// A boolean, rendered as `Yes`/`No` in tabular output.
    Bool(bool),
    /// An integer or float, rendered in decimal form.
    Number(Number),
    /// A string, rendered verbatim (the empty string renders as `""` so
    /// emptiness stays visible).
    String(String),
    /// An ordered list, addressed by index.
    Sequence(Vec<Value>),
    /// Keyed entries in insertion order.
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// Build a [`Value::Sequence`] from anything iterable.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Sequence(items.into_iter().collect())
    }

    /// Build a [`Value::Mapping`] from key/value pairs, keeping their order.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Whether this value is dropped entirely from rendered output.
    #[must_use]
    pub const fn is_omitted(&self) -> bool {
        matches!(self, Self::Absent | Self::Unrenderable)
    }

    /// Whether this value is a sequence or a mapping.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }

    /// Convert to a `serde_json::Value` for the JSON output mode.
    ///
    /// Follows JSON-serialization semantics for the ignorable variants:
    /// [`Value::Absent`] and [`Value::Unrenderable`] yield `None` here,
    /// are dropped from objects, and become `null` inside arrays.
    #[must_use]
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::Absent | Self::Unrenderable => None,
            Self::Null => Some(serde_json::Value::Null),
            Self::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Self::Number(n) => Some(serde_json::Value::Number(n.clone())),
            Self::String(s) => Some(serde_json::Value::String(s.clone())),
            Self::Sequence(items) => Some(serde_json::Value::Array(
                items
                    .iter()
                    .map(|item| item.to_json().unwrap_or(serde_json::Value::Null))
                    .collect(),
            )),
            Self::Mapping(entries) => {
                let mut map = serde_json::Map::with_capacity(entries.len());
                for (key, value) in entries {
                    if let Some(json) = value.to_json() {
                        map.insert(key.clone(), json);
                    }
                }
                Some(serde_json::Value::Object(map))
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON form and become [`Value::Null`].
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    /// `None` maps to [`Value::Absent`], so optional fields disappear from
    /// rendered output instead of showing a placeholder.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
