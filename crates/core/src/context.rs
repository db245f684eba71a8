use indexmap::IndexMap;

/// A single node in a data context's value tree: either a nested mapping, or
/// a scalar (string/integer/double).
#[derive(Clone, Debug, PartialEq)]
pub enum ContextValue {
    Map(IndexMap<String, ContextValue>),
    String(String),
    Integer(i64),
    Float(f64),
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<IndexMap<String, ContextValue>> for ContextValue {
    fn from(value: IndexMap<String, ContextValue>) -> Self {
        Self::Map(value)
    }
}

/// Convert a [serde_json::Value] into a [ContextValue]. Only objects,
/// strings, and numbers are meaningful in a data context; anything else is a
/// programmer error in how the context was assembled, not a runtime failure
/// the engine needs to recover from, so this panics rather than returning a
/// `Result`.
impl From<serde_json::Value> for ContextValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    panic!("Number {n} is not representable as i64 or f64")
                }
            }
            serde_json::Value::Object(map) => Self::Map(
                map.into_iter().map(|(k, v)| (k, Self::from(v))).collect(),
            ),
            other => panic!(
                "Cannot build a template data context from JSON value {other:?}; \
                 only objects, strings, and numbers are supported"
            ),
        }
    }
}

impl ContextValue {
    pub fn as_map(&self) -> Option<&IndexMap<String, ContextValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Stringify a scalar using the generic half-up-rounding rule (see
    /// the value resolver). Returns `None` for non-scalar values.
    pub(crate) fn stringify(&self) -> Option<String> {
        match self {
            Self::Map(_) => None,
            Self::String(s) => Some(s.clone()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(f) => Some(round_half_up(*f).to_string()),
        }
    }

    /// The raw numeric value, without any rounding. Used by `numberFormat`,
    /// which needs fractional precision the generic stringification rule
    /// would otherwise discard.
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// Half-up rounding to the nearest integer, matching the reference behavior
/// (`2.34 -> 2`, `-55.7 -> -56`).
pub(crate) fn round_half_up(value: f64) -> i64 {
    if value >= 0.0 {
        (value + 0.5).floor() as i64
    } else {
        (value - 0.5).ceil() as i64
    }
}

/// A top-level keyword a path may begin with.
pub const TOP_LEVEL_KEYWORDS: &[&str] = &["data", "url", "user"];

/// The data a template is rendered against: a mapping from top-level keyword
/// (`data`, `url`, `user`) to a nested value tree. Never mutated by the
/// engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataContext {
    roots: IndexMap<String, ContextValue>,
}

impl DataContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a subtree under a top-level keyword, replacing any existing
    /// value there.
    pub fn insert(
        &mut self,
        keyword: impl Into<String>,
        value: impl Into<ContextValue>,
    ) -> &mut Self {
        self.roots.insert(keyword.into(), value.into());
        self
    }

    /// Navigate a dotted path (`data.user.name`) through the context. Returns
    /// `None` if the top-level keyword is absent, an intermediate segment is
    /// missing or not a mapping, or the terminal value is itself a mapping.
    pub(crate) fn resolve(&self, path: &str) -> Option<&ContextValue> {
        let mut segments = path.split('.');
        let root = segments.next()?;
        let mut current = self.roots.get(root)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }
}
