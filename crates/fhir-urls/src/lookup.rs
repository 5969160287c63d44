//! Short name lookup.
//!
//! A short name is the last `/` separated segment of a URL. Sub-extensions are
//! usually addressed by it, so these helpers turn a list of URLs into a
//! short name map and report where that map would be ambiguous.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{FhirUrlError, FhirUrlResult};

/// Returns the last path segment of `url`.
///
/// Trailing slashes are ignored. Input without any `/` is returned whole.
pub fn last_segment(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Maps the last path segment of every URL to the URL.
///
/// When two URLs end in the same segment the later one wins, and a warning is
/// logged. Use [`try_sub_extensions`] to fail instead.
pub fn sub_extensions<'a, I>(urls: I) -> HashMap<&'a str, &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = HashMap::new();
    for url in urls {
        let key = last_segment(url);
        if let Some(previous) = map.insert(key, url) {
            if previous != url {
                tracing::warn!(key, previous, url, "short name collision, keeping the later url");
            }
        }
    }
    map
}

/// Like [`sub_extensions`] but rejects two distinct URLs sharing a short name.
///
/// Repeating the same URL is not a collision.
pub fn try_sub_extensions<'a, I>(urls: I) -> FhirUrlResult<HashMap<&'a str, &'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map: HashMap<&str, &str> = HashMap::new();
    for url in urls {
        let key = last_segment(url);
        match map.get(key) {
            Some(first) if *first != url => {
                return Err(FhirUrlError::SubExtensionCollision {
                    key: key.to_owned(),
                    first: (*first).to_owned(),
                    second: url.to_owned(),
                });
            }
            Some(_) => {}
            None => {
                map.insert(key, url);
            }
        }
    }
    Ok(map)
}

/// A short name shared by more than one distinct URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision<'a> {
    pub key: &'a str,
    /// Distinct URLs in input order. The last one is what [`sub_extensions`] keeps.
    pub urls: Vec<&'a str>,
}

/// Every short name that maps to more than one distinct URL, sorted by key.
pub fn collisions<'a, I>(urls: I) -> Vec<Collision<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for url in urls {
        let seen = grouped.entry(last_segment(url)).or_default();
        if !seen.contains(&url) {
            seen.push(url);
        }
    }
    grouped
        .into_iter()
        .filter(|(_, urls)| urls.len() > 1)
        .map(|(key, urls)| Collision { key, urls })
        .collect()
}

/// URLs that occur more than once, each reported once, in first-seen order.
pub fn duplicates<'a, I>(urls: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for url in urls {
        let count = counts.entry(url).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(url);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension;

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("https://x/a/b"), "b");
        assert_eq!(last_segment("https://x/a/b/"), "b");
        assert_eq!(last_segment("lang"), "lang");
        assert_eq!(last_segment(""), "");
    }

    #[test]
    fn test_sub_extensions_keys_by_last_segment() {
        let map = sub_extensions(["https://x/a/b", "https://x/a/c"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], "https://x/a/b");
        assert_eq!(map["c"], "https://x/a/c");
    }

    #[test]
    fn test_sub_extensions_last_write_wins() {
        let map = sub_extensions(["https://x/a/b", "https://y/z/b"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["b"], "https://y/z/b");
    }

    #[test]
    fn test_sub_extensions_without_slash_uses_whole_input() {
        let map = sub_extensions(["content"]);
        assert_eq!(map["content"], "content");
    }

    #[test]
    fn test_sub_extensions_accepts_owned_strings() {
        let urls = vec!["https://x/a/b".to_string()];
        let map = sub_extensions(urls.iter().map(String::as_str));
        assert_eq!(map["b"], "https://x/a/b");
    }

    #[test]
    fn test_try_sub_extensions_rejects_collision() {
        let err = try_sub_extensions(["https://x/a/b", "https://y/z/b"]).expect_err("collision");
        match err {
            FhirUrlError::SubExtensionCollision { key, first, second } => {
                assert_eq!(key, "b");
                assert_eq!(first, "https://x/a/b");
                assert_eq!(second, "https://y/z/b");
            }
            other => panic!("expected SubExtensionCollision, got {other:?}"),
        }
    }

    #[test]
    fn test_try_sub_extensions_allows_repeats() {
        let map = try_sub_extensions(["https://x/a/b", "https://x/a/b"]).expect("no collision");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_collisions_groups_distinct_urls() {
        let urls = ["https://x/a/b", "https://x/a/c", "https://y/z/b", "https://x/a/b"];
        let found = collisions(urls);
        assert_eq!(
            found,
            [Collision {
                key: "b",
                urls: vec!["https://x/a/b", "https://y/z/b"],
            }]
        );
    }

    #[test]
    fn test_duplicates_reported_once() {
        let found = duplicates(["a", "b", "a", "a", "c", "b"]);
        assert_eq!(found, ["a", "b"]);
    }

    #[test]
    fn test_curated_maps_are_collision_free() {
        for urls in [
            extension::sprec::all_domains(),
            extension::study::schedule::all_domains(),
            extension::patient::ethnicities::all_domains(),
            extension::sample_location::schema::all_domains(),
        ] {
            let strict = try_sub_extensions(urls.iter().copied()).expect("no collision");
            assert_eq!(strict.len(), urls.len());
        }
    }
}
