//! Text resolvers used at render time.
//!
//! The host engine calls [`TextResolver::resolve`] once per text node with the
//! node's keypath and the text authored in the animation file.

use crate::case_insensitive::{
    find_case_insensitive, find_collision, find_key_case_insensitive, upsert_case_insensitive,
};
use crate::{loader, Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Strategy for choosing the text displayed for a keypath.
///
/// Implementations must not fail: when nothing better is known they return
/// `source_text`.
pub trait TextResolver: Send + Sync {
    /// Returns the text to render for `keypath_name`.
    fn resolve(&self, keypath_name: &str, source_text: &str) -> String;
}

/// Default resolver. Uses the text in the animation file.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughResolver;

impl PassthroughResolver {
    pub const fn new() -> Self {
        Self
    }
}

impl TextResolver for PassthroughResolver {
    fn resolve(&self, _keypath_name: &str, source_text: &str) -> String {
        source_text.to_owned()
    }
}

/// Resolver backed by a fixed keypath to text mapping.
///
/// Keypaths are trimmed and matched case-insensitively against the stored
/// keys. Unknown keypaths fall back to the source text.
///
/// ```
/// use keytext::{MapResolver, TextResolver};
///
/// let resolver: MapResolver = [("Title", "Bonjour")].into_iter().collect();
/// assert_eq!(resolver.resolve("  TITLE ", "Hello"), "Bonjour");
/// assert_eq!(resolver.resolve("Subtitle", "World"), "World");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MapResolver {
    values: HashMap<String, String>,
}

impl MapResolver {
    /// Creates a resolver from a mapping. Any mapping is accepted.
    ///
    /// Keys colliding case-insensitively resolve to the key equal to the
    /// lookup, else to the smallest colliding key in byte order.
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Creates a resolver, rejecting keys that collide when case is ignored.
    pub fn try_new(values: HashMap<String, String>) -> Result<Self> {
        if let Some((first, second)) = find_collision(&values) {
            return Err(Error::KeyCollision { first, second });
        }
        Ok(Self::new(values))
    }

    /// Loads a mapping file (JSON, or TOML by extension).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_mapping(path).map(Self::new)
    }

    /// Returns the resolver with `key` set to `value`, overwriting the entry
    /// whose key matches case-insensitively if there is one.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        upsert_case_insensitive(&mut self.values, key, value.into());
        self
    }

    /// Looks up a value ignoring case. The key is used as given.
    pub fn get(&self, key: &str) -> Option<&str> {
        find_case_insensitive(&self.values, key).map(String::as_str)
    }

    /// Returns the mapping with keys in their stored casing.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping has no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TextResolver for MapResolver {
    fn resolve(&self, keypath_name: &str, source_text: &str) -> String {
        let keypath = keypath_name.trim();
        match find_key_case_insensitive(&self.values, keypath) {
            Some(key) => {
                tracing::trace!(target: "keytext::resolver", keypath, key, "keypath resolved");
                self.values[key].clone()
            }
            None => {
                tracing::trace!(
                    target: "keytext::resolver",
                    keypath,
                    "keypath not mapped, using source text"
                );
                source_text.to_owned()
            }
        }
    }
}

impl From<HashMap<String, String>> for MapResolver {
    fn from(values: HashMap<String, String>) -> Self {
        Self::new(values)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapResolver {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<T: TextResolver + ?Sized> TextResolver for Box<T> {
    fn resolve(&self, keypath_name: &str, source_text: &str) -> String {
        (**self).resolve(keypath_name, source_text)
    }
}

impl<T: TextResolver + ?Sized> TextResolver for std::sync::Arc<T> {
    fn resolve(&self, keypath_name: &str, source_text: &str) -> String {
        (**self).resolve(keypath_name, source_text)
    }
}
