//! Consistency checks over the whole registry.

use cxx_fhir_urls::{lookup, registry, FhirUrlError, Namespace};

/// Problems found by [`check_registry`].
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Namespaces listing the same URL twice.
    pub duplicates: Vec<(String, Vec<&'static str>)>,
    /// Curated sub-extension maps that would drop a URL.
    pub curated_collisions: Vec<(String, FhirUrlError)>,
    /// Leaf namespaces whose derived short name map is ambiguous.
    pub collisions: Vec<(String, lookup::Collision<'static>)>,
}

impl CheckReport {
    /// Duplicates and curated collisions fail the check. Plain collisions only warn.
    pub fn is_ok(&self) -> bool {
        self.duplicates.is_empty() && self.curated_collisions.is_empty()
    }
}

pub fn check_registry() -> CheckReport {
    check_namespace(registry())
}

/// Checks every namespace below `root`.
pub fn check_namespace(root: &Namespace) -> CheckReport {
    let mut report = CheckReport::default();
    for (path, node) in root.walk() {
        let domains = node.all_domains();

        let dupes = lookup::duplicates(domains.iter().copied());
        if !dupes.is_empty() {
            report.duplicates.push((path.clone(), dupes));
        }

        if let Some(urls) = node.sub_extension_urls() {
            if let Err(err) = lookup::try_sub_extensions(urls.iter().copied()) {
                report.curated_collisions.push((path.clone(), err));
            }
        } else if node.children().is_empty() {
            for collision in lookup::collisions(domains.iter().copied()) {
                report.collisions.push((path.clone(), collision));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_domains() -> Vec<&'static str> {
        vec!["https://x/a/status", "https://x/a/date"]
    }

    fn colliding_urls() -> Vec<&'static str> {
        vec!["https://x/a/status", "https://y/b/status"]
    }

    static DRIFT_CHILDREN: [Namespace; 1] =
        [Namespace::leaf("drift", Some("https://x/a"), distinct_domains)
            .with_sub_extensions(colliding_urls)];

    static CURATED_DRIFT: Namespace =
        Namespace::leaf("root", None, distinct_domains).with_children(&DRIFT_CHILDREN);

    #[test]
    fn test_registry_passes() {
        let report = check_registry();
        assert!(report.duplicates.is_empty(), "{:?}", report.duplicates);
        assert!(report.curated_collisions.is_empty(), "{:?}", report.curated_collisions);
        assert!(report.is_ok());
    }

    #[test]
    fn test_curated_map_checked_against_its_own_urls() {
        let report = check_namespace(&CURATED_DRIFT);
        assert!(!report.is_ok());
        assert_eq!(report.curated_collisions.len(), 1);
        match &report.curated_collisions[0] {
            (path, FhirUrlError::SubExtensionCollision { key, .. }) => {
                assert_eq!(path, "drift");
                assert_eq!(key, "status");
            }
            other => panic!("expected SubExtensionCollision, got {other:?}"),
        }
    }

    #[test]
    fn test_curated_sizes_match_their_url_lists() {
        for (path, node) in registry().walk() {
            if let (Some(urls), Some(map)) = (node.sub_extension_urls(), node.sub_extensions()) {
                assert_eq!(map.len(), urls.len(), "{path}");
            }
        }
    }
}
