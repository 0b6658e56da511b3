//! Replacement sources.
//!
//! A call to `render_cached` substitutes marker tokens from exactly one
//! source:
//!
//! - [`Replace::Name`]: render one partial; its name is also its key.
//! - [`Replace::Names`]: render several partials, each keyed by its name.
//! - [`Replace::Map`]: substitute caller-supplied values, no inner render.
//!
//! Map values are [`Replacement`]s. A [`Replacement::Computed`] value is only
//! evaluated at substitution time, once per collection item, so it can vary
//! with the item being rendered.

use std::collections::BTreeMap;
use std::fmt;

/// Callable that turns the current collection item into a replacement value.
///
/// Receives `None` when the call has no collection. Returning `None`
/// substitutes the empty string.
pub type ComputeFn<'a, T> = dyn Fn(Option<&T>) -> Option<String> + 'a;

/// The value substituted for one key of a [`ReplaceMap`].
pub enum Replacement<'a, T> {
    /// Fixed text. `None` substitutes the empty string.
    Literal(Option<String>),
    /// Text computed from the current collection item.
    Computed(Box<ComputeFn<'a, T>>),
}

impl<'a, T> Replacement<'a, T> {
    /// A fixed value.
    pub fn literal(value: impl Into<String>) -> Self {
        Replacement::Literal(Some(value.into()))
    }

    /// A value that substitutes the empty string.
    pub fn nil() -> Self {
        Replacement::Literal(None)
    }

    /// A value computed from the current collection item.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(Option<&T>) -> Option<String> + 'a,
    {
        Replacement::Computed(Box::new(f))
    }

    /// Resolve to the text that replaces the marker.
    pub fn resolve(&self, item: Option<&T>) -> String {
        match self {
            Replacement::Literal(value) => value.clone().unwrap_or_default(),
            Replacement::Computed(compute) => compute(item).unwrap_or_default(),
        }
    }
}

impl<T> fmt::Debug for Replacement<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Replacement::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<T> From<&str> for Replacement<'_, T> {
    fn from(value: &str) -> Self {
        Replacement::literal(value)
    }
}

impl<T> From<String> for Replacement<'_, T> {
    fn from(value: String) -> Self {
        Replacement::Literal(Some(value))
    }
}

impl<T> From<Option<String>> for Replacement<'_, T> {
    fn from(value: Option<String>) -> Self {
        Replacement::Literal(value)
    }
}

impl<T> From<Option<&str>> for Replacement<'_, T> {
    fn from(value: Option<&str>) -> Self {
        Replacement::Literal(value.map(str::to_string))
    }
}

/// Key → value table for [`Replace::Map`].
///
/// ```
/// use cache_rocket::rendering::ReplaceMap;
///
/// let map: ReplaceMap<'_, ()> = ReplaceMap::new()
///     .literal("food", "chips")
///     .literal("beer", "stout")
///     .nil("empty");
/// assert_eq!(map.len(), 3);
/// ```
pub struct ReplaceMap<'a, T> {
    entries: BTreeMap<String, Replacement<'a, T>>,
}

impl<'a, T> ReplaceMap<'a, T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add an entry. A later entry for the same key wins.
    pub fn insert(
        &mut self,
        key: impl fmt::Display,
        value: impl Into<Replacement<'a, T>>,
    ) -> &mut Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl fmt::Display, value: impl Into<Replacement<'a, T>>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn literal(self, key: impl fmt::Display, value: impl Into<String>) -> Self {
        self.with(key, Replacement::literal(value))
    }

    pub fn nil(self, key: impl fmt::Display) -> Self {
        self.with(key, Replacement::nil())
    }

    pub fn computed<F>(self, key: impl fmt::Display, f: F) -> Self
    where
        F: Fn(Option<&T>) -> Option<String> + 'a,
    {
        self.with(key, Replacement::computed(f))
    }

    pub fn get(&self, key: &str) -> Option<&Replacement<'a, T>> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Replacement<'a, T>)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<T> Default for ReplaceMap<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ReplaceMap<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<'a, T, K, V> FromIterator<(K, V)> for ReplaceMap<'a, T>
where
    K: fmt::Display,
    V: Into<Replacement<'a, T>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Where substitution text comes from for one render.
pub enum Replace<'a, T> {
    /// One partial; its name is its key.
    Name(String),
    /// Several partials, each keyed by its own name.
    Names(Vec<String>),
    /// Caller-supplied values.
    Map(ReplaceMap<'a, T>),
}

impl<T> fmt::Debug for Replace<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replace::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Replace::Names(names) => f.debug_tuple("Names").field(names).finish(),
            Replace::Map(map) => f.debug_tuple("Map").field(map).finish(),
        }
    }
}

impl<T> From<&str> for Replace<'_, T> {
    fn from(name: &str) -> Self {
        Replace::Name(name.to_string())
    }
}

impl<T> From<String> for Replace<'_, T> {
    fn from(name: String) -> Self {
        Replace::Name(name)
    }
}

impl<T> From<Vec<String>> for Replace<'_, T> {
    fn from(names: Vec<String>) -> Self {
        Replace::Names(names)
    }
}

impl<T> From<Vec<&str>> for Replace<'_, T> {
    fn from(names: Vec<&str>) -> Self {
        Replace::Names(names.into_iter().map(str::to_string).collect())
    }
}

impl<T, const N: usize> From<[&str; N]> for Replace<'_, T> {
    fn from(names: [&str; N]) -> Self {
        Replace::Names(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<'a, T> From<ReplaceMap<'a, T>> for Replace<'a, T> {
    fn from(map: ReplaceMap<'a, T>) -> Self {
        Replace::Map(map)
    }
}
