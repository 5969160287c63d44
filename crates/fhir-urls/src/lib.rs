//! # CentraXX FHIR URLs
//!
//! A read-only registry of the URLs CentraXX uses on FHIR resources:
//! - [`extension`]: `Extension.url` values under `https://fhir.centraxx.de/extension`
//! - [`system`]: CodeSystem, identifier system and ValueSet URIs
//! - [`catalog`]: catalog resource URLs
//!
//! Every module exposes its constants plus an `all_domains()` function listing
//! every URL declared in it and its submodules, in declaration order. A few
//! modules also offer `sub_extensions()`, a map from the last path segment of
//! each URL to the URL itself.
//!
//! The same tree is reachable at runtime through [`registry`], which is what the
//! command line tool walks.

pub mod catalog;
pub mod extension;
pub mod lookup;
pub mod namespace;
pub mod system;

pub use cxx_types::{GenderType, ShortName, ShortNameError};
pub use lookup::{last_segment, sub_extensions, try_sub_extensions, Collision};
pub use namespace::{Namespace, NamespaceEntry};

/// Root of every CentraXX owned URL.
pub const CXX_BASE_URL: &str = "https://fhir.centraxx.de";

static REGISTRY: Namespace = Namespace {
    children: &[extension::NAMESPACE, catalog::NAMESPACE, system::NAMESPACE],
    ..Namespace::leaf("", Some(CXX_BASE_URL), all_domains)
};

/// Errors raised when looking things up in the registry.
#[derive(Debug, thiserror::Error)]
pub enum FhirUrlError {
    #[error("unknown namespace '{0}'")]
    UnknownNamespace(String),
    #[error("no url with short name '{name}' in namespace '{namespace}'")]
    UnknownShortName { namespace: String, name: String },
    #[error("short name '{key}' is used by both {first} and {second}")]
    SubExtensionCollision {
        key: String,
        first: String,
        second: String,
    },
    #[error(transparent)]
    ShortName(#[from] ShortNameError),
}

pub type FhirUrlResult<T> = Result<T, FhirUrlError>;

/// The root of the namespace tree. Its children are `extension`, `catalog` and `system`.
pub fn registry() -> &'static Namespace {
    &REGISTRY
}

/// Every URL in the registry.
pub fn all_domains() -> Vec<&'static str> {
    let mut domains = extension::all_domains();
    domains.extend(catalog::all_domains());
    domains.extend(system::all_domains());
    domains
}

/// Looks up a namespace by dotted path, e.g. `extension.study.schedule`.
///
/// An empty path returns the root.
pub fn find(path: &str) -> FhirUrlResult<&'static Namespace> {
    registry().find(path)
}

/// Resolves a short name inside the namespace at `path`.
///
/// Misses are reported with the full dotted path rather than the last segment.
pub fn resolve(path: &str, name: &ShortName) -> FhirUrlResult<&'static str> {
    let path = path.trim();
    find(path)?.resolve(name).map_err(|err| match err {
        FhirUrlError::UnknownShortName { name, .. } => FhirUrlError::UnknownShortName {
            namespace: path.to_owned(),
            name,
        },
        other => other,
    })
}

/// Lists the namespace at `path` and every namespace below it, with full dotted paths.
pub fn entries(path: &str) -> FhirUrlResult<Vec<NamespaceEntry>> {
    let path = path.trim();
    let node = find(path)?;
    let mut out = Vec::new();
    if !path.is_empty() {
        out.push(NamespaceEntry::new(path.to_owned(), node));
    }
    for (relative, child) in node.walk() {
        let full = if path.is_empty() {
            relative
        } else {
            format!("{path}.{relative}")
        };
        out.push(NamespaceEntry::new(full, child));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Namespaces whose domains are not all below their own base URL.
    const OFF_BASE_NAMESPACES: [&str; 5] = [
        "extension",
        "extension.diagnosis",
        "extension.translation",
        "system",
        "system.document",
    ];

    fn is_under(url: &str, base: &str) -> bool {
        url == base
            || url
                .strip_prefix(base)
                .and_then(|rest| rest.strip_prefix('/'))
                .is_some_and(|rest| !rest.is_empty() && rest.split('/').all(|s| !s.is_empty()))
    }

    fn value_set_twin(base: &str) -> Option<String> {
        base.strip_prefix(system::BASE_URL)
            .map(|rest| format!("{}{rest}", system::BASE_URL_VALUESET))
    }

    #[test]
    fn test_every_domain_sits_below_its_namespace_base() {
        for (path, node) in registry().walk() {
            let Some(base) = node.base_url() else {
                continue;
            };
            if OFF_BASE_NAMESPACES.contains(&path.as_str()) {
                continue;
            }
            let twin = value_set_twin(base);
            for url in node.all_domains() {
                let under_twin = twin.as_deref().is_some_and(|twin| is_under(url, twin));
                assert!(is_under(url, base) || under_twin, "{path}: {url} is not below {base}");
            }
        }
    }

    #[test]
    fn test_is_under_requires_a_segment_boundary() {
        let base = "https://fhir.centraxx.de/extension/calendar/attachment";
        assert!(is_under(&format!("{base}/patient"), base));
        assert!(is_under(base, base));
        assert!(!is_under("https://fhir.centraxx.de/extension/calendar/attachmnt/patient", base));
        assert!(!is_under(&format!("{base}Patient"), base));
        assert!(!is_under(&format!("{base}//patient"), base));
    }

    #[test]
    fn test_calendar_attachment_domains_in_order() {
        assert_eq!(
            extension::calendar::attachment::all_domains(),
            [
                "https://fhir.centraxx.de/extension/calendar/attachment/patient",
                "https://fhir.centraxx.de/extension/calendar/attachment/crf",
                "https://fhir.centraxx.de/extension/calendar/attachment/sample",
                "https://fhir.centraxx.de/extension/calendar/attachment/study",
                "https://fhir.centraxx.de/extension/calendar/attachment/studyMember",
            ]
        );
    }

    #[test]
    fn test_gtds_surgery_domains_in_order() {
        let base = "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/";
        let segments: Vec<_> = extension::gtds_therapy::surgery::all_domains()
            .into_iter()
            .map(|url| url.strip_prefix(base).unwrap_or(url))
            .collect();
        assert_eq!(
            segments,
            [
                "intentionDict",
                "conceptId",
                "therapyStep",
                "dateAccuracyDict",
                "accomplishedByText",
                "captureFinishStateDict",
                "opDescription",
                "opText",
                "rClassificationDict",
                "lymphNodesExaminated",
                "lymphNodesInfested",
                "lymphNode_1_Examinated",
                "lymphNode_1_Infested",
                "lymphNode_2_Examinated",
                "lymphNode_2_Infested",
                "lymphNode_3_Examinated",
                "lymphNode_3_Infested",
                "lymphNode_4_Examinated",
                "lymphNode_4_Infested",
                "sentinelsExaminated",
                "sentinelsInfested",
                "buildingDate",
                "complicationsDict",
                "targetPrimaryTumourDict",
                "targetLymphnodeDict",
                "targetMetastasisDict",
                "resectionDict",
                "targetComplicationDict",
                "targetOtherDict",
                "residualLocalisationDict",
                "rClassificationSuffix",
                "rClassificationLocalDict",
                "urgencyDict",
                "successDict",
                "largestDiameter",
                "distanceResection",
                "operateur1Text",
                "operateur2Text",
                "asaScore",
                "surgicalAccess",
            ]
        );
    }

    #[test]
    fn test_resolve_reports_full_path() {
        let name = ShortName::new("shoeSize").expect("valid short name");
        let err = resolve("extension.sprec", &name).expect_err("unknown short name");
        match err {
            FhirUrlError::UnknownShortName { namespace, name } => {
                assert_eq!(namespace, "extension.sprec");
                assert_eq!(name, "shoeSize");
            }
            other => panic!("expected UnknownShortName, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_finds_curated_url() {
        let name = ShortName::new("warmIschTime").expect("valid short name");
        assert_eq!(resolve("extension.sprec", &name).unwrap(), extension::sprec::WARM_ISCH_TIME);
    }

    #[test]
    fn test_top_level_counts() {
        assert_eq!(extension::all_domains().len(), 337);
        assert_eq!(catalog::all_domains().len(), 6);
        assert_eq!(system::all_domains().len(), 434);
        assert_eq!(all_domains().len(), 337 + 6 + 434);
    }

    #[test]
    fn test_registry_matches_modules() {
        assert_eq!(registry().all_domains(), all_domains());
        let names: Vec<_> = registry().children().iter().map(Namespace::name).collect();
        assert_eq!(names, ["extension", "catalog", "system"]);
    }

    #[test]
    fn test_every_namespace_is_duplicate_free() {
        for (path, node) in registry().walk() {
            let domains = node.all_domains();
            let dupes = lookup::duplicates(domains.iter().copied());
            assert!(dupes.is_empty(), "{path} repeats {dupes:?}");
        }
    }

    #[test]
    fn test_every_domain_is_a_non_empty_string() {
        assert!(all_domains().iter().all(|url| !url.trim().is_empty()));
    }

    #[test]
    fn test_all_domains_is_deterministic() {
        for (path, node) in registry().walk() {
            assert_eq!(node.all_domains(), node.all_domains(), "{path}");
        }
    }

    #[test]
    fn test_extension_urls_share_the_extension_base() {
        let foreign: Vec<_> = extension::all_domains()
            .into_iter()
            .filter(|url| !url.starts_with(extension::BASE_URL))
            .collect();
        assert_eq!(
            foreign,
            [
                extension::translation::BASE_URL,
                extension::translation::LANG,
                extension::translation::CONTENT,
                extension::fhir_defaults::DATA_ABSENT_REASON,
            ]
        );
    }

    #[test]
    fn test_owned_system_urls_share_the_cxx_base() {
        let hl7 = system::fhir_defaults::all_domains();
        for url in system::all_domains() {
            if hl7.contains(&url) {
                assert!(url.starts_with("http://"), "{url}");
            } else {
                assert!(url.starts_with(CXX_BASE_URL), "{url}");
            }
        }
    }

    #[test]
    fn test_entries_use_full_paths() {
        let entries = entries("extension.study").expect("known namespace");
        let paths: Vec<_> = entries.iter().map(|entry| entry.path.as_str()).collect();
        assert_eq!(paths[0], "extension.study");
        assert!(paths.contains(&"extension.study.visits.visit"));
        assert!(paths.contains(&"extension.study.schedule"));
        assert!(entries.iter().all(|entry| entry.path.starts_with("extension.study")));
    }

    #[test]
    fn test_entries_at_root_skip_the_root() {
        let entries = entries("").expect("root");
        assert_eq!(entries[0].path, "extension");
        assert_eq!(entries.len(), registry().walk().len());
    }

    #[test]
    fn test_find_unknown_namespace() {
        let err = find("extension.nope").expect_err("should not resolve");
        assert!(matches!(err, FhirUrlError::UnknownNamespace(path) if path == "extension.nope"));
    }
}
