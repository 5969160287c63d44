//! Case report form extensions.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/crf";
pub const CREATION_DATE: &str = "https://fhir.centraxx.de/extension/crf/creationDate";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![CREATION_DATE];
    domains.extend(crf_item::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[crf_item::NAMESPACE],
    ..Namespace::leaf("crf", Some(BASE_URL), all_domains)
};

pub mod crf_item {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/crf/item";
    pub const VALUE_INDEX: &str = "https://fhir.centraxx.de/extension/crf/item/valueIndex";

    pub fn all_domains() -> Vec<&'static str> {
        vec![VALUE_INDEX]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("crf_item", Some(BASE_URL), all_domains);
}
