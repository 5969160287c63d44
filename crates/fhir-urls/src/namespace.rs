//! Runtime view of the registry tree.
//!
//! Each registry module declares a `NAMESPACE` constant describing itself: its
//! name, its base URL, how to list its domains and which child modules it has.
//! [`crate::registry`] ties the three top-level trees together so callers can
//! navigate by dotted path instead of by Rust module path.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{lookup, FhirUrlError, FhirUrlResult, ShortName};

type DomainsFn = fn() -> Vec<&'static str>;

/// One node of the registry tree.
#[derive(Debug, Clone, Copy)]
pub struct Namespace {
    pub(crate) name: &'static str,
    pub(crate) base_url: Option<&'static str>,
    pub(crate) domains: DomainsFn,
    pub(crate) sub_extension_urls: Option<DomainsFn>,
    pub(crate) children: &'static [Namespace],
}

impl Namespace {
    /// A node without children or a sub-extension map.
    pub const fn leaf(
        name: &'static str,
        base_url: Option<&'static str>,
        domains: DomainsFn,
    ) -> Self {
        Self {
            name,
            base_url,
            domains,
            sub_extension_urls: None,
            children: &[],
        }
    }

    /// Publishes a curated short name map built from the URLs `urls` returns.
    pub const fn with_sub_extensions(self, urls: DomainsFn) -> Self {
        Self {
            sub_extension_urls: Some(urls),
            ..self
        }
    }

    pub const fn with_children(self, children: &'static [Namespace]) -> Self {
        Self { children, ..self }
    }

    /// The path segment of this node, e.g. `sprec`. Empty for the root.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The URL every constant of this node was built from, when there is one.
    ///
    /// Nodes that only collect HL7 URLs have no common base.
    pub fn base_url(&self) -> Option<&'static str> {
        self.base_url
    }

    pub fn children(&self) -> &'static [Namespace] {
        self.children
    }

    /// Every URL declared in this node and its descendants, in declaration order.
    pub fn all_domains(&self) -> Vec<&'static str> {
        (self.domains)()
    }

    /// Whether this node publishes a curated sub-extension map.
    pub fn has_sub_extensions(&self) -> bool {
        self.sub_extension_urls.is_some()
    }

    /// The URLs the curated short name map is built from.
    pub fn sub_extension_urls(&self) -> Option<Vec<&'static str>> {
        self.sub_extension_urls.map(|urls| urls())
    }

    /// The curated short name map of this node, if it publishes one.
    pub fn sub_extensions(&self) -> Option<HashMap<&'static str, &'static str>> {
        self.sub_extension_urls().map(lookup::sub_extensions)
    }

    pub fn child(&self, name: &str) -> Option<&'static Namespace> {
        let name = name.strip_prefix("r#").unwrap_or(name);
        self.children.iter().find(|child| child.name == name)
    }

    /// Walks a dotted path such as `study.visits.visit` down from this node.
    ///
    /// An empty path returns `self`.
    pub fn find(&self, path: &str) -> FhirUrlResult<&Namespace> {
        let path = path.trim();
        if path.is_empty() {
            return Ok(self);
        }
        let mut node = self;
        for segment in path.split('.') {
            node = node
                .child(segment.trim())
                .ok_or_else(|| FhirUrlError::UnknownNamespace(path.to_owned()))?;
        }
        Ok(node)
    }

    /// Resolves a short name to its full URL.
    ///
    /// Uses the curated sub-extension map when the node has one, otherwise a map
    /// built from [`Namespace::all_domains`] with the usual last-write-wins rule.
    pub fn resolve(&self, name: &ShortName) -> FhirUrlResult<&'static str> {
        let map = self
            .sub_extensions()
            .unwrap_or_else(|| lookup::sub_extensions(self.all_domains()));
        map.get(name.as_str())
            .copied()
            .ok_or_else(|| FhirUrlError::UnknownShortName {
                namespace: self.name.to_owned(),
                name: name.to_string(),
            })
    }

    /// Every descendant with its dotted path relative to this node, depth first.
    pub fn walk(&self) -> Vec<(String, &Namespace)> {
        let mut out = Vec::new();
        visit(self, "", &mut out);
        out
    }
}

fn visit<'a>(node: &'a Namespace, prefix: &str, out: &mut Vec<(String, &'a Namespace)>) {
    for child in node.children {
        let path = if prefix.is_empty() {
            child.name.to_owned()
        } else {
            format!("{prefix}.{}", child.name)
        };
        out.push((path.clone(), child));
        visit(child, &path, out);
    }
}

/// Serializable snapshot of one namespace, as exported by the command line tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceEntry {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<&'static str>,
    pub domains: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_extensions: Option<BTreeMap<&'static str, &'static str>>,
}

impl NamespaceEntry {
    pub fn new(path: String, node: &Namespace) -> Self {
        Self {
            path,
            base_url: node.base_url(),
            domains: node.all_domains(),
            sub_extensions: node
                .sub_extensions()
                .map(|map| map.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{extension, registry, system};

    fn short(name: &str) -> ShortName {
        ShortName::new(name).expect("valid short name")
    }

    #[test]
    fn test_find_nested_namespace() {
        let node = registry().find("extension.study.visits.visit").expect("known path");
        assert_eq!(node.name(), "visit");
        assert_eq!(node.all_domains(), extension::study::visits::visit::all_domains());
    }

    #[test]
    fn test_find_accepts_raw_identifier_segments() {
        let plain = registry().find("system.calendar.type").expect("plain");
        let raw = registry().find("system.calendar.r#type").expect("raw");
        assert_eq!(plain.base_url(), raw.base_url());
        assert_eq!(plain.base_url(), Some(system::calendar::r#type::BASE_URL));
    }

    #[test]
    fn test_find_reports_full_path_on_miss() {
        let err = registry().find("system.patient.shoeSize").expect_err("unknown");
        match err {
            FhirUrlError::UnknownNamespace(path) => assert_eq!(path, "system.patient.shoeSize"),
            other => panic!("expected UnknownNamespace, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_uses_curated_map() {
        let status = registry().find("extension.service_request.status").expect("known");
        assert!(status.has_sub_extensions());
        assert_eq!(
            status.resolve(&short("currentStatus")).expect("curated"),
            extension::service_request::status::CURRENT_STATUS
        );
    }

    #[test]
    fn test_resolve_falls_back_to_domains() {
        let tumor = registry().find("system.tumor").expect("known");
        assert!(!tumor.has_sub_extensions());
        assert_eq!(tumor.resolve(&short("xmlId")).expect("derived"), system::tumor::XML_ID);
    }

    #[test]
    fn test_resolve_unknown_short_name() {
        let sprec = registry().find("extension.sprec").expect("known");
        let err = sprec.resolve(&short("shoeSize")).expect_err("unknown");
        assert!(matches!(
            err,
            FhirUrlError::UnknownShortName { namespace, name }
                if namespace == "sprec" && name == "shoeSize"
        ));
    }

    #[test]
    fn test_walk_is_depth_first() {
        let paths: Vec<_> = registry()
            .find("extension.study")
            .expect("known")
            .walk()
            .into_iter()
            .map(|(path, _)| path)
            .collect();
        let visits = paths.iter().position(|p| p == "visits").expect("visits");
        assert_eq!(paths[visits + 1], "visits.visit");
    }

    #[test]
    fn test_walk_has_no_leading_dot() {
        assert!(registry().walk().iter().all(|(path, _)| !path.starts_with('.')));
    }

    #[test]
    fn test_sub_extension_nodes() {
        let mut curated: Vec<_> = registry()
            .walk()
            .into_iter()
            .filter(|(_, node)| node.has_sub_extensions())
            .map(|(path, _)| path)
            .collect();
        curated.sort();
        assert_eq!(
            curated,
            [
                "extension.patient.ethnicities",
                "extension.sample_location.schema",
                "extension.service_request.labor_mappings",
                "extension.service_request.status",
                "extension.sprec",
                "extension.study.schedule",
            ]
        );
    }

    #[test]
    fn test_entry_serializes_sorted_sub_extensions() {
        let node = registry().find("extension.service_request.status").expect("known");
        let entry = NamespaceEntry::new("extension.service_request.status".into(), node);
        let json = serde_json::to_value(&entry).expect("serialize");
        let keys: Vec<_> = json["sub_extensions"]
            .as_object()
            .expect("map")
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["currentStatus", "lastStatusTransition"]);
        assert_eq!(json["base_url"], extension::service_request::status::BASE_URL);
    }

    #[test]
    fn test_entry_omits_missing_base_url() {
        let node = registry().find("system.fhir_defaults").expect("known");
        let json = serde_json::to_value(NamespaceEntry::new("system.fhir_defaults".into(), node))
            .expect("serialize");
        assert!(json.get("base_url").is_none());
        assert!(json.get("sub_extensions").is_none());
    }
}
