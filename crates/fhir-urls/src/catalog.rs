//! Catalog resource URLs.
//!
//! Unlike the rest of the registry these sit under `/catalog`, and the base URL
//! itself is part of the domain list.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/catalog";
pub const ICD_CATALOG: &str = "https://fhir.centraxx.de/catalog/IcdCatalog";
pub const CUSTOM_CATALOG: &str = "https://fhir.centraxx.de/catalog/Catalog";
pub const OPS_CATALOG: &str = "https://fhir.centraxx.de/catalog/OpsCatalog";
pub const VALUELIST: &str = "https://fhir.centraxx.de/catalog/ValueList";
pub const MASTERDATACATALOG: &str = "https://fhir.centraxx.de/catalog/MasterDataCatalog";

pub fn all_domains() -> Vec<&'static str> {
    vec![BASE_URL, ICD_CATALOG, CUSTOM_CATALOG, OPS_CATALOG, VALUELIST, MASTERDATACATALOG]
}

pub(crate) const NAMESPACE: Namespace = Namespace::leaf("catalog", Some(BASE_URL), all_domains);
