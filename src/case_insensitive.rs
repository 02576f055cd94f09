//! Case-insensitive helpers over string-keyed maps.
//!
//! Stored keys keep their original casing. Lookups compare the per-char
//! Unicode lowercase mappings, so `"ΣΟΦΙΑ"` matches `"σοφια"` and `"ÄPFEL"`
//! matches `"äpfel"`. There is no multi-char case folding: `"STRASSE"` does
//! not match `"straße"`.
//!
//! When several stored keys collide once case is ignored, a key equal to the
//! query wins; otherwise the smallest colliding key in byte order is used.

use std::collections::HashMap;

/// Compares two strings ignoring case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Finds the stored key matching `key` case-insensitively.
pub fn find_key_case_insensitive<'a, V>(map: &'a HashMap<String, V>, key: &str) -> Option<&'a str> {
    if let Some((stored, _)) = map.get_key_value(key) {
        return Some(stored.as_str());
    }
    map.keys()
        .filter(|stored| eq_ignore_case(stored, key))
        .min()
        .map(String::as_str)
}

/// Looks up a value by key, ignoring case.
pub fn find_case_insensitive<'a, V>(map: &'a HashMap<String, V>, key: &str) -> Option<&'a V> {
    let stored = find_key_case_insensitive(map, key)?;
    map.get(stored)
}

/// Inserts or overwrites a value, ignoring case.
///
/// If a stored key matches `key` case-insensitively its value is replaced and
/// the stored casing is kept. Otherwise the value is inserted under `key` as
/// given. Returns the replaced value, if any.
pub fn upsert_case_insensitive<V>(
    map: &mut HashMap<String, V>,
    key: impl Into<String>,
    value: V,
) -> Option<V> {
    let key = key.into();
    match find_key_case_insensitive(map, &key).map(str::to_owned) {
        Some(stored) => map.insert(stored, value),
        None => map.insert(key, value),
    }
}

/// Lays `layer` over `base`.
///
/// Every key in `base` matching a key of `layer` case-insensitively is
/// removed, then the layer's entries are inserted under their literal keys.
/// Keys colliding inside `layer` are all kept, so lookups on the result
/// settle them the same way as on `layer` alone.
pub fn overlay_case_insensitive<V>(base: &mut HashMap<String, V>, layer: HashMap<String, V>) {
    base.retain(|key, _| !layer.keys().any(|incoming| eq_ignore_case(key, incoming)));
    base.extend(layer);
}

/// Returns the first pair of keys (in byte order) that collide once case is ignored.
pub fn find_collision<V>(map: &HashMap<String, V>) -> Option<(String, String)> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    let mut seen: HashMap<String, &String> = HashMap::with_capacity(keys.len());
    for key in keys {
        let folded: String = key.chars().flat_map(char::to_lowercase).collect();
        if let Some(first) = seen.get(&folded) {
            return Some(((*first).clone(), key.clone()));
        }
        seen.insert(folded, key);
    }
    None
}
