//! Options accepted by [`CachedRenderer`](super::CachedRenderer).
//!
//! [`CacheOptions`] carries the two control settings (`replace` and
//! `collection`) in typed fields and everything else in [`RenderOptions`],
//! which is forwarded verbatim to the host for the outer render and for every
//! name-based inner render.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::replace::Replace;
use crate::constants::RESERVED_OPTION_KEYS;
use crate::core::CacheRocketError;

/// Key/value options forwarded to the host render function.
///
/// Backed by a JSON object so hosts can hand it straight to their template
/// engine as a context. Never contains the reserved keys `replace` or
/// `collection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderOptions(Map<String, Value>);

impl RenderOptions {
    /// Create empty render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build render options from a raw map, dropping the reserved control keys.
    ///
    /// ```
    /// use cache_rocket::rendering::RenderOptions;
    /// use serde_json::json;
    ///
    /// let raw = json!({ "variable": "x", "replace": "inner", "collection": [1, 2] });
    /// let options = RenderOptions::from_map(raw.as_object().unwrap().clone());
    ///
    /// assert_eq!(options.len(), 1);
    /// assert_eq!(options.get("variable"), Some(&json!("x")));
    /// ```
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        for key in RESERVED_OPTION_KEYS {
            if map.remove(key).is_some() {
                tracing::debug!("Dropped reserved key '{}' from render options", key);
            }
        }
        Self(map)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an option. Reserved keys are ignored.
    ///
    /// Returns the previous value for `key`, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if RESERVED_OPTION_KEYS.contains(&key.as_str()) {
            tracing::debug!("Ignoring reserved key '{}' in render options", key);
            return None;
        }
        self.0.insert(key, value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Borrow the options as a JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert the options into a JSON value (always an object).
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for RenderOptions {
    type Error = CacheRocketError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            Value::Null => Ok(Self::new()),
            other => Err(CacheRocketError::InvalidRenderOptions {
                reason: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
        }
    }
}

impl From<Map<String, Value>> for RenderOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Everything a single `render_cached` call needs besides the template name.
///
/// `T` is the collection item type. Calls without a collection use
/// [`CacheOptions::new`], which fixes `T = ()`.
///
/// ```
/// use cache_rocket::rendering::{CacheOptions, ReplaceMap};
///
/// // Single partial, with an option forwarded to every render
/// let single = CacheOptions::new().replace("inner").option("variable", "x");
///
/// // Per-item literal values over a collection
/// let dogs = CacheOptions::with_collection(vec!["Snoop", "Boo"])
///     .replace(ReplaceMap::new().computed("dog", |dog: Option<&&str>| dog.map(|d| d.to_string())));
/// # let _ = (single, dogs);
/// ```
pub struct CacheOptions<'a, T> {
    pub(crate) replace: Option<Replace<'a, T>>,
    pub(crate) collection: Option<Vec<T>>,
    pub(crate) render_options: RenderOptions,
}

impl<'a> CacheOptions<'a, ()> {
    /// Options for a call without a collection.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a, T> CacheOptions<'a, T> {
    /// Options that run the render-and-substitute cycle once per item.
    pub fn with_collection(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            replace: None,
            collection: Some(items.into_iter().collect()),
            render_options: RenderOptions::new(),
        }
    }

    /// Set the replacement source: a name, a list of names, or a [`ReplaceMap`](super::ReplaceMap).
    pub fn replace(mut self, source: impl Into<Replace<'a, T>>) -> Self {
        self.replace = Some(source.into());
        self
    }

    /// Add one option forwarded to the host.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.render_options.insert(key, value);
        self
    }

    /// Replace all forwarded options at once.
    pub fn render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    pub fn replace_source(&self) -> Option<&Replace<'a, T>> {
        self.replace.as_ref()
    }

    pub fn collection(&self) -> Option<&[T]> {
        self.collection.as_deref()
    }

    pub fn forwarded_options(&self) -> &RenderOptions {
        &self.render_options
    }
}

impl<T> Default for CacheOptions<'_, T> {
    fn default() -> Self {
        Self {
            replace: None,
            collection: None,
            render_options: RenderOptions::new(),
        }
    }
}

impl<T> std::fmt::Debug for CacheOptions<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheOptions")
            .field("replace", &self.replace)
            .field("collection", &self.collection.as_ref().map(Vec::len))
            .field("render_options", &self.render_options)
            .finish()
    }
}
