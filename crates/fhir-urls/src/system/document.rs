//! Document identifier and code systems.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/document";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/document";
pub const DOCUMENT_ID: &str = "https://fhir.centraxx.de/system/document/documentId";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![DOCUMENT_ID];
    domains.extend(kind::all_domains());
    domains.extend(mapping_type::all_domains());
    domains.extend(category::all_domains());
    domains.extend(status::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[kind::NAMESPACE, mapping_type::NAMESPACE, category::NAMESPACE, status::NAMESPACE],
    ..Namespace::leaf("document", Some(BASE_URL), all_domains)
};

code_system!(kind => "document/kind");
code_system!(mapping_type => "mappingType");
code_system!(category => "document/category");
code_system!(status => "document/status");
