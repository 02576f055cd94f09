use keytext::{Error, MapResolver, PassthroughResolver, TextResolver};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Arc;

fn mapping(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn exact_keys_resolve_to_their_values() {
    let values = mapping(&[
        ("Intro.Title", "Bienvenue"),
        ("Intro/Button", "Commencer"),
        ("Outro.Credits", ""),
    ]);
    let resolver = MapResolver::new(values.clone());

    for (key, value) in &values {
        assert_eq!(&resolver.resolve(key, "ignored"), value);
    }
}

#[test]
fn unicode_keys_match_ignoring_case() {
    let resolver = MapResolver::new(mapping(&[("Überschrift", "Titel"), ("ΣΟΦΙΑ", "wisdom")]));

    assert_eq!(resolver.resolve("überschrift", "x"), "Titel");
    assert_eq!(resolver.resolve(" σοφια ", "x"), "wisdom");
}

#[test]
fn interior_whitespace_is_significant() {
    let resolver = MapResolver::new(mapping(&[("Intro Title", "A")]));

    assert_eq!(resolver.resolve(" intro title ", "src"), "A");
    assert_eq!(resolver.resolve("Intro  Title", "src"), "src");
}

#[test]
fn empty_mapping_always_falls_back() {
    let resolver = MapResolver::new(HashMap::new());

    assert!(resolver.is_empty());
    for keypath in ["", " ", "Intro.Title", "\u{00A0}x"] {
        assert_eq!(resolver.resolve(keypath, "fallback"), "fallback");
    }
}

#[test]
fn passthrough_ignores_keypath() {
    let resolver = PassthroughResolver;
    let long = "é".repeat(10_000);

    assert_eq!(resolver.resolve("Intro.Title", ""), "");
    assert_eq!(resolver.resolve("", &long), long);
}

#[test]
fn resolve_is_repeatable() {
    let resolver = MapResolver::new(mapping(&[("FOO", "1"), ("Foo", "2"), ("foo", "3")]));

    let first = resolver.resolve("fOo", "src");
    for _ in 0..16 {
        assert_eq!(resolver.resolve("fOo", "src"), first);
    }
    assert_eq!(first, "1");
}

#[test]
fn strict_construction_accepts_distinct_keys() {
    let resolver = MapResolver::try_new(mapping(&[("A", "1"), ("B", "2")]))
        .expect("distinct keys must be accepted");
    assert_eq!(resolver.len(), 2);

    let err = MapResolver::try_new(mapping(&[("Ab", "1"), ("aB", "2")]))
        .expect_err("colliding keys must be rejected");
    assert!(matches!(err, Error::KeyCollision { .. }));
}

#[test]
fn shared_resolver_across_threads() {
    let resolver: Arc<dyn TextResolver> =
        Arc::new(MapResolver::new(mapping(&[("Intro.Title", "Bienvenue")])));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            std::thread::spawn(move || {
                if i % 2 == 0 {
                    resolver.resolve("INTRO.TITLE", "Welcome")
                } else {
                    resolver.resolve("Intro.Missing", "Welcome")
                }
            })
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("resolver thread panicked"))
        .collect();
    assert_eq!(results, vec!["Bienvenue", "Welcome", "Bienvenue", "Welcome"]);
}
